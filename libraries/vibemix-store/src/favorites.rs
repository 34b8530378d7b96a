//! Favorites document operations.

use crate::error::{Result, StoreClientError};
use crate::types::{
    CreateFavoriteRequest, CreateFavoriteResponse, FavoriteDocument, UpdateSongsRequest,
};
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::debug;
use vibemix_core::Song;

/// Client for the favorites collection endpoints.
pub(crate) struct FavoritesClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: &'a str,
}

impl<'a> FavoritesClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: &'a str) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Append a new playlist document; returns the assigned id.
    pub(crate) async fn create(
        &self,
        owner_id: &str,
        prompt: &str,
        songs: &[Song],
        created_at: DateTime<Utc>,
    ) -> Result<String> {
        let url = format!("{}/api/favorites", self.base_url);
        debug!(url = %url, owner_id = %owner_id, songs = songs.len(), "Creating favorite");

        let request = CreateFavoriteRequest {
            owner_id,
            prompt,
            songs,
            created_at,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();

        if status.is_success() {
            let created: CreateFavoriteResponse = response.json().await.map_err(|e| {
                StoreClientError::ParseError(format!("Failed to parse create response: {}", e))
            })?;

            debug!(id = %created.id, "Favorite created");
            Ok(created.id)
        } else if status.as_u16() == 401 {
            Err(StoreClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(StoreClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Fetch every playlist document owned by `owner_id`.
    ///
    /// The response carries no ordering guarantee; callers sort.
    pub(crate) async fn list_all(&self, owner_id: &str) -> Result<Vec<FavoriteDocument>> {
        let url = format!(
            "{}/api/favorites?owner={}",
            self.base_url,
            urlencoding::encode(owner_id)
        );
        debug!(url = %url, "Fetching favorites");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.access_token)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();

        if status.is_success() {
            let documents: Vec<FavoriteDocument> = response.json().await.map_err(|e| {
                StoreClientError::ParseError(format!("Failed to parse favorites response: {}", e))
            })?;

            debug!(count = documents.len(), "Fetched favorites");
            Ok(documents)
        } else if status.as_u16() == 401 {
            Err(StoreClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(StoreClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Delete one playlist document.
    pub(crate) async fn delete_one(&self, id: &str) -> Result<()> {
        let url = format!("{}/api/favorites/{}", self.base_url, id);
        debug!(url = %url, id = %id, "Deleting favorite");

        let response = self
            .http
            .delete(&url)
            .bearer_auth(self.access_token)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();

        if status.is_success() {
            debug!(id = %id, "Favorite deleted");
            Ok(())
        } else if status.as_u16() == 401 {
            Err(StoreClientError::AuthRequired)
        } else if status.as_u16() == 404 {
            Err(StoreClientError::NotFound(id.to_string()))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(StoreClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Replace the songs field of one playlist document.
    ///
    /// Partial update: unrelated fields are never sent.
    pub(crate) async fn update_songs(&self, id: &str, songs: &[Song]) -> Result<()> {
        let url = format!("{}/api/favorites/{}/songs", self.base_url, id);
        debug!(url = %url, id = %id, songs = songs.len(), "Updating songs");

        let request = UpdateSongsRequest { songs };

        let response = self
            .http
            .patch(&url)
            .bearer_auth(self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();

        if status.is_success() {
            debug!(id = %id, "Songs updated");
            Ok(())
        } else if status.as_u16() == 401 {
            Err(StoreClientError::AuthRequired)
        } else if status.as_u16() == 404 {
            Err(StoreClientError::NotFound(id.to_string()))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(StoreClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

fn connection_error(e: reqwest::Error) -> StoreClientError {
    if e.is_connect() || e.is_timeout() {
        StoreClientError::Unreachable(e.to_string())
    } else {
        StoreClientError::Request(e)
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
