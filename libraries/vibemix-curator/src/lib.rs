//! VibeMix - Curation Engine
//!
//! Turns a free-text mood prompt into an ordered song list:
//! - Keyword mood matcher over six fixed pools (`match_mood`)
//! - Fisher-Yates playlist sampler (`sample_songs`)
//! - Session playlist state holding the single unsaved candidate
//!   (`SessionState`)
//!
//! The matching is deliberately a static keyword table, not language
//! understanding; pool priority order is fixed and part of the contract.
//!
//! # Example
//!
//! ```rust
//! use vibemix_curator::SessionState;
//!
//! let mut session = SessionState::new();
//! let draft = session.generate("chill sunday morning").unwrap();
//! assert!(!draft.songs.is_empty());
//! assert!(draft.songs.len() <= vibemix_curator::MAX_PLAYLIST_SONGS);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod matcher;
mod pools;
mod sampler;
mod session;

pub use matcher::match_mood;
pub use pools::{pool_songs, PoolId};
pub use sampler::{sample_songs, MAX_PLAYLIST_SONGS};
pub use session::SessionState;
