//! Legacy local-file favorites store.
//!
//! Used only in the absence of a remote store; the entire collection is
//! one serialized JSON document, read-modify-written per operation.
//! Mutually exclusive with the remote path.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;
use vibemix_core::{
    FavoritesStore, OwnerId, PlaylistDraft, PlaylistId, Result, SavedPlaylist, Song, VibeError,
};

/// File-backed implementation of [`FavoritesStore`].
///
/// Single-process only: a mutex serializes the read-modify-write cycle
/// so two operations in the same process cannot interleave on the file.
pub struct LocalFavoritesStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl LocalFavoritesStore {
    /// Open a store backed by the given file. The file is created on
    /// first write; a missing file reads as an empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<SavedPlaylist>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, documents: &[SavedPlaylist]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(documents)?;
        tokio::fs::write(&self.path, bytes).await?;
        debug!(path = %self.path.display(), count = documents.len(), "Saved favorites file");
        Ok(())
    }
}

#[async_trait]
impl FavoritesStore for LocalFavoritesStore {
    async fn create(&self, owner: &OwnerId, draft: &PlaylistDraft) -> Result<PlaylistId> {
        let _guard = self.guard.lock().await;

        let mut documents = self.load().await?;
        let id = PlaylistId::generate();
        documents.push(SavedPlaylist::from_draft(
            id.clone(),
            owner.clone(),
            draft.clone(),
        ));
        self.save(&documents).await?;
        Ok(id)
    }

    async fn list_all(&self, owner: &OwnerId) -> Result<Vec<SavedPlaylist>> {
        let _guard = self.guard.lock().await;

        let documents = self.load().await?;
        Ok(documents
            .into_iter()
            .filter(|p| &p.owner_id == owner)
            .collect())
    }

    async fn delete_one(&self, id: &PlaylistId) -> Result<()> {
        let _guard = self.guard.lock().await;

        let mut documents = self.load().await?;
        let before = documents.len();
        documents.retain(|p| &p.id != id);
        if documents.len() == before {
            return Err(VibeError::PlaylistNotFound(id.clone()));
        }
        self.save(&documents).await
    }

    async fn update_songs(&self, id: &PlaylistId, songs: &[Song]) -> Result<()> {
        let _guard = self.guard.lock().await;

        let mut documents = self.load().await?;
        let playlist = documents
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| VibeError::PlaylistNotFound(id.clone()))?;
        playlist.songs = songs.to_vec();
        self.save(&documents).await
    }
}
