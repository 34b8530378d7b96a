//! Error types for the store clients.

use thiserror::Error;
use vibemix_core::{AuthReason, VibeError};

/// Errors that can occur when talking to the favorites store or the
/// identity provider.
#[derive(Error, Debug)]
pub enum StoreClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Authentication required but no token available
    #[error("Authentication required")]
    AuthRequired,

    /// The identity provider rejected the credentials
    #[error("Authentication rejected: {0}")]
    AuthRejected(AuthReason),

    /// No document with this id is owned by the caller
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Store is offline or unreachable
    #[error("Store unreachable: {0}")]
    Unreachable(String),

    /// Failed to parse a server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid store URL
    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),
}

impl From<StoreClientError> for VibeError {
    fn from(err: StoreClientError) -> Self {
        match err {
            StoreClientError::NotFound(id) => VibeError::playlist_not_found(id),
            StoreClientError::AuthRequired => VibeError::Unauthenticated,
            StoreClientError::AuthRejected(reason) => VibeError::Auth(reason),
            other => VibeError::store_unavailable(other.to_string()),
        }
    }
}

/// Result type for store client operations.
pub type Result<T> = std::result::Result<T, StoreClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_converts_to_playlist_not_found() {
        let err: VibeError = StoreClientError::NotFound("doc-1".into()).into();
        match err {
            VibeError::PlaylistNotFound(id) => assert_eq!(id.as_str(), "doc-1"),
            e => panic!("Expected PlaylistNotFound, got: {e:?}"),
        }
    }

    #[test]
    fn auth_errors_convert_to_core_variants() {
        assert!(matches!(
            VibeError::from(StoreClientError::AuthRequired),
            VibeError::Unauthenticated
        ));
        assert!(matches!(
            VibeError::from(StoreClientError::AuthRejected(AuthReason::WrongPassword)),
            VibeError::Auth(AuthReason::WrongPassword)
        ));
    }

    #[test]
    fn transport_errors_convert_to_store_unavailable() {
        let err: VibeError = StoreClientError::Unreachable("connection refused".into()).into();
        assert!(matches!(err, VibeError::StoreUnavailable(_)));
    }
}
