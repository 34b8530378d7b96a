//! The coordinating controller.
//!
//! One controller instance owns the application state and is the only
//! writer to it. All operations are non-blocking from the caller's
//! perspective; within one user action the mutate-then-refetch sequence
//! is strictly ordered, and across actions the last refetch to complete
//! wins on the local cache.

use crate::favorites::FavoritesViewModel;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;
use vibemix_core::{
    FavoritesStore, Identity, IdentityProvider, PlaylistDraft, PlaylistId, Result, SavedPlaylist,
    VibeError,
};

/// Coordinates the curation engine, favorites store, and identity
/// provider on behalf of the view layer.
pub struct Controller {
    state: AppState,
    favorites: FavoritesViewModel,
    provider: Arc<dyn IdentityProvider>,
}

impl Controller {
    /// Create a controller over a store and identity provider, with
    /// fresh state.
    pub fn new(store: Arc<dyn FavoritesStore>, provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            state: AppState::new(),
            favorites: FavoritesViewModel::new(store),
            provider,
        }
    }

    /// The application state, for rendering.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The cached favorites collection, most recent first.
    pub fn favorites(&self) -> &[SavedPlaylist] {
        self.favorites.playlists()
    }

    /// The unsaved candidate playlist, if any.
    pub fn candidate(&self) -> Option<&PlaylistDraft> {
        self.state.session.candidate()
    }

    /// Generate a fresh candidate playlist from a mood prompt.
    ///
    /// Local and synchronous; replaces any existing candidate.
    pub fn generate(&mut self, prompt: &str) -> Result<&PlaylistDraft> {
        self.state.session.generate(prompt)
    }

    /// Persist the current candidate to the signed-in identity's
    /// favorites.
    ///
    /// The candidate is discarded only once the follow-up reload has
    /// confirmed persistence; on any failure it is retained so the user
    /// can retry.
    pub async fn save_favorite(&mut self) -> Result<PlaylistId> {
        let draft = self
            .state
            .session
            .candidate()
            .ok_or(VibeError::NoCandidate)?
            .clone();
        let owner = self
            .state
            .identity
            .as_ref()
            .ok_or(VibeError::Unauthenticated)?
            .user_id
            .clone();

        self.state.busy = true;
        let result = self.favorites.save(&owner, &draft).await;
        self.state.busy = false;

        let id = result?;
        self.state.session.clear();
        info!(id = %id, "Playlist saved to favorites");
        Ok(id)
    }

    /// Delete a persisted playlist.
    ///
    /// Destructive and unrecoverable; the view layer must have obtained
    /// explicit user confirmation before calling this.
    pub async fn delete_favorite(&mut self, id: &PlaylistId) -> Result<()> {
        let owner = self.owner()?;

        self.state.busy = true;
        let result = self.favorites.delete(&owner, id).await;
        self.state.busy = false;
        result
    }

    /// Remove one song from a persisted playlist.
    pub async fn remove_song(&mut self, id: &PlaylistId, index: usize) -> Result<()> {
        let owner = self.owner()?;

        self.state.busy = true;
        let result = self.favorites.remove_song(&owner, id, index).await;
        self.state.busy = false;
        result
    }

    /// Sign in and load the identity's favorites.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<()> {
        self.state.busy = true;
        let result = self.provider.sign_in(email, password).await;
        self.state.busy = false;

        self.identity_changed(Some(result?)).await
    }

    /// Register a new account and load its (empty) favorites.
    pub async fn sign_up(&mut self, email: &str, password: &str) -> Result<()> {
        self.state.busy = true;
        let result = self.provider.sign_up(email, password).await;
        self.state.busy = false;

        self.identity_changed(Some(result?)).await
    }

    /// Sign out the current identity.
    pub async fn sign_out(&mut self) -> Result<()> {
        self.provider.sign_out().await?;
        self.identity_changed(None).await
    }

    /// React to an identity transition (startup, sign-in, sign-out).
    ///
    /// The favorites cache is cleared before any reload so no stale
    /// cross-identity data is ever rendered, even transiently.
    pub async fn identity_changed(&mut self, identity: Option<Identity>) -> Result<()> {
        self.state.identity = identity;
        self.favorites.clear();

        if let Some(identity) = self.state.identity.clone() {
            info!(user_id = %identity.user_id, "Identity changed; reloading favorites");
            self.favorites.refresh(&identity.user_id).await?;
        } else {
            info!("Signed out; favorites cleared");
        }
        Ok(())
    }

    fn owner(&self) -> Result<vibemix_core::OwnerId> {
        Ok(self
            .state
            .identity
            .as_ref()
            .ok_or(VibeError::Unauthenticated)?
            .user_id
            .clone())
    }
}
