/// Seam traits for VibeMix
///
/// The controller only ever sees these traits; the HTTP clients, the
/// in-memory store, and the legacy local-file store all implement them.
use crate::error::Result;
use crate::types::{Identity, OwnerId, PlaylistDraft, PlaylistId, SavedPlaylist, Song};
use async_trait::async_trait;

/// Per-user playlist document store.
///
/// All operations are fallible network calls; none retries
/// automatically. Playlist mutations are not idempotent-safe to repeat
/// blindly (a retried create would duplicate the playlist), so retry
/// policy belongs to the user, not the adapter.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Append a new playlist document owned by `owner`.
    ///
    /// The draft's `created_at` is persisted as-is; creation time is
    /// preserved, not save time.
    async fn create(&self, owner: &OwnerId, draft: &PlaylistDraft) -> Result<PlaylistId>;

    /// Fetch every playlist document owned by `owner`.
    ///
    /// No ordering guarantee; callers sort by `created_at` descending
    /// after every fetch.
    async fn list_all(&self, owner: &OwnerId) -> Result<Vec<SavedPlaylist>>;

    /// Delete one playlist document.
    ///
    /// Fails with [`crate::VibeError::PlaylistNotFound`] if no such
    /// document is owned by the caller's identity (enforced by the
    /// store, not checked locally).
    async fn delete_one(&self, id: &PlaylistId) -> Result<()>;

    /// Replace the songs field of one playlist document.
    ///
    /// Partial update: `prompt`, `created_at`, and the owner are never
    /// touched.
    async fn update_songs(&self, id: &PlaylistId, songs: &[Song]) -> Result<()>;
}

/// External identity provider.
///
/// The core does not implement sign-in itself; it reacts to the
/// provider's state and surfaces its rejections as
/// [`crate::VibeError::Auth`].
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Sign in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity>;

    /// Register a new account and sign it in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity>;

    /// Sign out the current identity.
    async fn sign_out(&self) -> Result<()>;
}
