//! VibeMix Store Clients
//!
//! Implementations of the [`vibemix_core::FavoritesStore`] and
//! [`vibemix_core::IdentityProvider`] seams:
//!
//! - **Remote client**: HTTP client for the favorites document store and
//!   its identity provider (bearer auth, JSON bodies)
//! - **In-memory store**: multi-owner store for tests
//! - **Local store**: legacy single-file path used in the absence of a
//!   remote store; mutually exclusive with the remote path
//!
//! None of the clients retries automatically: a retried create would
//! duplicate the playlist, so retry policy stays with the user.
//!
//! # Example
//!
//! ```ignore
//! use vibemix_store::{StoreConfig, VibeStoreClient};
//! use vibemix_core::{FavoritesStore, IdentityProvider};
//!
//! let client = VibeStoreClient::new(StoreConfig::new("https://vibes.example.com"))?;
//! let identity = client.sign_in("me@example.com", "hunter2").await?;
//! let favorites = client.list_all(&identity.user_id).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod client;
mod config;
mod error;
mod favorites;
mod local;
mod memory;
mod types;

pub use client::VibeStoreClient;
pub use config::StoreConfig;
pub use error::{Result, StoreClientError};
pub use local::LocalFavoritesStore;
pub use memory::MemoryFavoritesStore;
pub use types::{CreateFavoriteResponse, FavoriteDocument, SignInResponse};
