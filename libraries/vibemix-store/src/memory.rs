//! In-memory favorites store for tests.

use async_trait::async_trait;
use std::sync::Mutex;
use vibemix_core::{
    FavoritesStore, OwnerId, PlaylistDraft, PlaylistId, Result, SavedPlaylist, Song, VibeError,
};

/// Multi-owner in-memory implementation of [`FavoritesStore`].
///
/// Behaves like the remote store (opaque generated ids, owner scoping,
/// no ordering guarantee) and can be armed to fail the next operation,
/// which makes failure-path testing cheap.
#[derive(Default)]
pub struct MemoryFavoritesStore {
    documents: Mutex<Vec<SavedPlaylist>>,
    fail_next: Mutex<Option<String>>,
}

impl MemoryFavoritesStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the store so its next operation fails with
    /// [`VibeError::StoreUnavailable`].
    pub fn fail_next(&self, message: impl Into<String>) {
        *self.fail_next.lock().expect("lock poisoned") = Some(message.into());
    }

    fn check_armed_failure(&self) -> Result<()> {
        if let Some(message) = self.fail_next.lock().expect("lock poisoned").take() {
            return Err(VibeError::StoreUnavailable(message));
        }
        Ok(())
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavoritesStore {
    async fn create(&self, owner: &OwnerId, draft: &PlaylistDraft) -> Result<PlaylistId> {
        self.check_armed_failure()?;

        let id = PlaylistId::generate();
        let mut documents = self.documents.lock().expect("lock poisoned");
        documents.push(SavedPlaylist::from_draft(
            id.clone(),
            owner.clone(),
            draft.clone(),
        ));
        Ok(id)
    }

    async fn list_all(&self, owner: &OwnerId) -> Result<Vec<SavedPlaylist>> {
        self.check_armed_failure()?;

        let documents = self.documents.lock().expect("lock poisoned");
        Ok(documents
            .iter()
            .filter(|p| &p.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn delete_one(&self, id: &PlaylistId) -> Result<()> {
        self.check_armed_failure()?;

        let mut documents = self.documents.lock().expect("lock poisoned");
        let before = documents.len();
        documents.retain(|p| &p.id != id);
        if documents.len() == before {
            return Err(VibeError::PlaylistNotFound(id.clone()));
        }
        Ok(())
    }

    async fn update_songs(&self, id: &PlaylistId, songs: &[Song]) -> Result<()> {
        self.check_armed_failure()?;

        let mut documents = self.documents.lock().expect("lock poisoned");
        let playlist = documents
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| VibeError::PlaylistNotFound(id.clone()))?;
        playlist.songs = songs.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(prompt: &str) -> PlaylistDraft {
        PlaylistDraft::new(
            prompt,
            vec![Song::new(
                "Dreams",
                "Fleetwood Mac",
                "https://www.youtube.com/watch?v=mrZRURcb1cM",
            )],
        )
    }

    #[tokio::test]
    async fn create_then_list_round_trips() {
        let store = MemoryFavoritesStore::new();
        let owner = OwnerId::new("u1");
        let d = draft("chill");

        let id = store.create(&owner, &d).await.unwrap();
        let listed = store.list_all(&owner).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].prompt, "chill");
        assert_eq!(listed[0].created_at, d.created_at);
    }

    #[tokio::test]
    async fn owners_are_isolated() {
        let store = MemoryFavoritesStore::new();
        let alice = OwnerId::new("alice");
        let bob = OwnerId::new("bob");

        store.create(&alice, &draft("a")).await.unwrap();
        let bob_id = store.create(&bob, &draft("b")).await.unwrap();

        store.delete_one(&bob_id).await.unwrap();

        assert_eq!(store.list_all(&alice).await.unwrap().len(), 1);
        assert!(store.list_all(&bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_document_is_not_found() {
        let store = MemoryFavoritesStore::new();
        let id = PlaylistId::new("ghost");

        assert!(matches!(
            store.delete_one(&id).await,
            Err(VibeError::PlaylistNotFound(_))
        ));
        assert!(matches!(
            store.update_songs(&id, &[]).await,
            Err(VibeError::PlaylistNotFound(_))
        ));
    }

    #[tokio::test]
    async fn armed_failure_fires_once() {
        let store = MemoryFavoritesStore::new();
        let owner = OwnerId::new("u1");

        store.fail_next("store offline");
        assert!(matches!(
            store.list_all(&owner).await,
            Err(VibeError::StoreUnavailable(_))
        ));
        assert!(store.list_all(&owner).await.is_ok());
    }
}
