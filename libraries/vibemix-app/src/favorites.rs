//! Favorites view model.
//!
//! The in-memory favorites collection is a cache of the store's
//! `list_all`. Every mutation follows the same protocol: perform the
//! remote mutation first, then unconditionally re-fetch the whole
//! collection and replace the cache wholesale. No optimistic local
//! patching, no partial merges — the rendered view always reflects
//! server-confirmed state, at the cost of one extra round trip per
//! mutation.

use std::sync::Arc;
use tracing::{debug, warn};
use vibemix_core::{
    sort_most_recent_first, FavoritesStore, OwnerId, PlaylistDraft, PlaylistId, Result,
    SavedPlaylist, VibeError,
};

/// Cache of the owner's persisted playlists, reconciled against the
/// store after every mutation.
pub struct FavoritesViewModel {
    store: Arc<dyn FavoritesStore>,
    playlists: Vec<SavedPlaylist>,
}

impl FavoritesViewModel {
    /// Create an empty view model over a store.
    pub fn new(store: Arc<dyn FavoritesStore>) -> Self {
        Self {
            store,
            playlists: Vec::new(),
        }
    }

    /// The cached collection, most recent first.
    pub fn playlists(&self) -> &[SavedPlaylist] {
        &self.playlists
    }

    /// Drop the cache without touching the store.
    ///
    /// Called on identity transitions so no stale cross-identity data
    /// is ever rendered, even transiently.
    pub fn clear(&mut self) {
        self.playlists.clear();
    }

    /// Replace the cache with a fresh fetch.
    ///
    /// The store guarantees no ordering, so the display order (most
    /// recent first) is re-derived here after every fetch.
    pub async fn refresh(&mut self, owner: &OwnerId) -> Result<()> {
        let mut playlists = self.store.list_all(owner).await?;
        sort_most_recent_first(&mut playlists);
        debug!(owner = %owner, count = playlists.len(), "Refreshed favorites cache");
        self.playlists = playlists;
        Ok(())
    }

    /// Persist a draft, then re-fetch.
    ///
    /// The draft's `created_at` travels with it; the saved copy of
    /// record is the one fetched back, never the local object.
    pub async fn save(&mut self, owner: &OwnerId, draft: &PlaylistDraft) -> Result<PlaylistId> {
        let id = self.store.create(owner, draft).await?;
        self.refresh(owner).await?;
        Ok(id)
    }

    /// Delete a playlist, then re-fetch.
    ///
    /// Destructive and unrecoverable: callers must have obtained
    /// explicit user confirmation before invoking this.
    pub async fn delete(&mut self, owner: &OwnerId, id: &PlaylistId) -> Result<()> {
        self.store.delete_one(id).await?;
        self.refresh(owner).await
    }

    /// Remove one song from a playlist, then re-fetch.
    ///
    /// A playlist id missing from the cache is a logged no-op: the
    /// cache can be stale relative to a concurrent deletion elsewhere,
    /// and interrupting the user for that helps nobody. Removing the
    /// last song is forbidden; deleting the playlist is the only way to
    /// empty it.
    pub async fn remove_song(
        &mut self,
        owner: &OwnerId,
        id: &PlaylistId,
        index: usize,
    ) -> Result<()> {
        let Some(playlist) = self.playlists.iter().find(|p| &p.id == id) else {
            warn!(id = %id, "Remove-song target not in cache; ignoring");
            return Ok(());
        };

        if playlist.songs.len() == 1 {
            return Err(VibeError::LastSong(id.clone()));
        }
        if index >= playlist.songs.len() {
            return Err(VibeError::SongIndexOutOfRange {
                index,
                len: playlist.songs.len(),
            });
        }

        let mut songs = playlist.songs.clone();
        songs.remove(index);

        self.store.update_songs(id, &songs).await?;
        self.refresh(owner).await
    }
}
