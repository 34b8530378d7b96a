//! Main store client.

use crate::auth::AuthClient;
use crate::config::StoreConfig;
use crate::error::{Result, StoreClientError};
use crate::favorites::FavoritesClient;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;
use vibemix_core::{
    FavoritesStore, Identity, IdentityProvider, OwnerId, PlaylistDraft, PlaylistId, SavedPlaylist,
    Song,
};

/// HTTP client for the favorites store and its identity provider.
///
/// Implements both [`FavoritesStore`] and [`IdentityProvider`] so the
/// controller can hold it behind either seam. The bearer token obtained
/// on sign-in is stored internally and attached to every favorites
/// request; sign-out clears it.
pub struct VibeStoreClient {
    http: Client,
    config: Arc<RwLock<StoreConfig>>,
}

impl VibeStoreClient {
    /// Create a new client with the given configuration.
    pub fn new(config: StoreConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(StoreClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(StoreClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = StoreConfig {
            url,
            access_token: config.access_token,
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("VibeMix/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StoreClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
        })
    }

    /// Get the store URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client holds an access token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.access_token.is_some()
    }

    async fn base_url(&self) -> String {
        self.config.read().await.url.clone()
    }

    async fn require_token(&self) -> Result<String> {
        self.config
            .read()
            .await
            .access_token
            .clone()
            .ok_or(StoreClientError::AuthRequired)
    }
}

#[async_trait]
impl IdentityProvider for VibeStoreClient {
    async fn sign_in(&self, email: &str, password: &str) -> vibemix_core::Result<Identity> {
        let url = self.base_url().await;
        let auth_client = AuthClient::new(&self.http, &url);
        let response = auth_client.sign_in(email, password).await?;

        let mut config = self.config.write().await;
        config.access_token = Some(response.access_token.clone());

        Ok(Identity::new(OwnerId::new(response.user_id), response.email))
    }

    async fn sign_up(&self, email: &str, password: &str) -> vibemix_core::Result<Identity> {
        let url = self.base_url().await;
        let auth_client = AuthClient::new(&self.http, &url);
        let response = auth_client.sign_up(email, password).await?;

        let mut config = self.config.write().await;
        config.access_token = Some(response.access_token.clone());

        Ok(Identity::new(OwnerId::new(response.user_id), response.email))
    }

    async fn sign_out(&self) -> vibemix_core::Result<()> {
        let mut config = self.config.write().await;
        config.access_token = None;
        info!("Signed out");
        Ok(())
    }
}

#[async_trait]
impl FavoritesStore for VibeStoreClient {
    async fn create(
        &self,
        owner: &OwnerId,
        draft: &PlaylistDraft,
    ) -> vibemix_core::Result<PlaylistId> {
        let url = self.base_url().await;
        let token = self.require_token().await?;
        let favorites = FavoritesClient::new(&self.http, &url, &token);

        let id = favorites
            .create(owner.as_str(), &draft.prompt, &draft.songs, draft.created_at)
            .await?;
        Ok(PlaylistId::new(id))
    }

    async fn list_all(&self, owner: &OwnerId) -> vibemix_core::Result<Vec<SavedPlaylist>> {
        let url = self.base_url().await;
        let token = self.require_token().await?;
        let favorites = FavoritesClient::new(&self.http, &url, &token);

        let documents = favorites.list_all(owner.as_str()).await?;
        Ok(documents
            .into_iter()
            .map(crate::types::FavoriteDocument::into_playlist)
            .collect())
    }

    async fn delete_one(&self, id: &PlaylistId) -> vibemix_core::Result<()> {
        let url = self.base_url().await;
        let token = self.require_token().await?;
        let favorites = FavoritesClient::new(&self.http, &url, &token);

        favorites.delete_one(id.as_str()).await?;
        Ok(())
    }

    async fn update_songs(&self, id: &PlaylistId, songs: &[Song]) -> vibemix_core::Result<()> {
        let url = self.base_url().await;
        let token = self.require_token().await?;
        let favorites = FavoritesClient::new(&self.http, &url, &token);

        favorites.update_songs(id.as_str(), songs).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        assert!(VibeStoreClient::new(StoreConfig::new("https://example.com")).is_ok());
        assert!(VibeStoreClient::new(StoreConfig::new("http://localhost:8080")).is_ok());

        assert!(VibeStoreClient::new(StoreConfig::new("")).is_err());
        assert!(VibeStoreClient::new(StoreConfig::new("not-a-url")).is_err());
        assert!(VibeStoreClient::new(StoreConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn url_normalization() {
        let client =
            VibeStoreClient::new(StoreConfig::new("https://example.com/")).expect("valid url");

        let url = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(client.url());
        assert_eq!(url, "https://example.com");
    }
}
