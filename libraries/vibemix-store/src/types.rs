//! Wire types for the store and identity-provider APIs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vibemix_core::{AuthReason, OwnerId, PlaylistId, SavedPlaylist, Song};

/// Sign-in / sign-up request body.
#[derive(Debug, Serialize)]
pub(crate) struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-in / sign-up response.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    /// Provider-assigned user id
    pub user_id: String,
    /// Canonicalized sign-in email
    pub email: String,
    /// Bearer token for subsequent store requests
    pub access_token: String,
}

/// Error body returned by the identity provider on 4xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthErrorBody {
    pub code: String,
}

/// Map a provider error code to the core rejection reason.
pub(crate) fn auth_reason_from_code(code: &str) -> Option<AuthReason> {
    match code {
        "invalid-email" => Some(AuthReason::InvalidEmail),
        "user-disabled" => Some(AuthReason::UserDisabled),
        "user-not-found" => Some(AuthReason::UserNotFound),
        "wrong-password" => Some(AuthReason::WrongPassword),
        "email-already-in-use" => Some(AuthReason::EmailInUse),
        "weak-password" => Some(AuthReason::WeakPassword),
        "invalid-credential" => Some(AuthReason::InvalidCredential),
        _ => None,
    }
}

/// A playlist document as stored remotely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteDocument {
    /// Store-assigned document id
    pub id: String,
    /// Owning identity
    pub owner_id: String,
    /// The originating mood text
    pub prompt: String,
    /// Songs in display order
    pub songs: Vec<Song>,
    /// Creation time of the original draft
    pub created_at: DateTime<Utc>,
}

impl FavoriteDocument {
    /// Convert the wire document into the domain type.
    pub fn into_playlist(self) -> SavedPlaylist {
        SavedPlaylist {
            id: PlaylistId::new(self.id),
            owner_id: OwnerId::new(self.owner_id),
            prompt: self.prompt,
            songs: self.songs,
            created_at: self.created_at,
        }
    }
}

/// Create-favorite request body.
#[derive(Debug, Serialize)]
pub(crate) struct CreateFavoriteRequest<'a> {
    pub owner_id: &'a str,
    pub prompt: &'a str,
    pub songs: &'a [Song],
    pub created_at: DateTime<Utc>,
}

/// Create-favorite response: the assigned document id.
#[derive(Debug, Deserialize)]
pub struct CreateFavoriteResponse {
    /// Store-assigned document id
    pub id: String,
}

/// Partial-update request body for the songs field.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateSongsRequest<'a> {
    pub songs: &'a [Song],
}
