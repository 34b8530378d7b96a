//! VibeMix Core
//!
//! Domain types, traits, and error handling for VibeMix, the mood-driven
//! playlist curator.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `PlaylistDraft`, `SavedPlaylist`, `Identity`
//! - **Seam Traits**: `FavoritesStore`, `IdentityProvider`
//! - **Error Handling**: Unified `VibeError` and `Result` types
//!
//! Everything above this crate (curation engine, store clients, playback,
//! controller) speaks in these types; nothing here touches the network or
//! a rendering layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{AuthReason, Result, VibeError};
pub use traits::{FavoritesStore, IdentityProvider};
pub use types::{
    sort_most_recent_first, Identity, OwnerId, PlaylistDraft, PlaylistId, SavedPlaylist, Song,
};
