//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The stored link is not a recognized external-video URL shape
    #[error("Not a playable video link: {0}")]
    InvalidLink(String),

    /// The player widget reported a failure
    #[error("Player widget error: {0}")]
    Widget(String),
}

impl From<PlaybackError> for vibemix_core::VibeError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::InvalidLink(link) => vibemix_core::VibeError::InvalidLink(link),
            PlaybackError::Widget(msg) => vibemix_core::VibeError::Other(msg),
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
