/// Core error types for VibeMix
use crate::types::PlaylistId;
use thiserror::Error;

/// Result type alias using `VibeError`
pub type Result<T> = std::result::Result<T, VibeError>;

/// Reasons an identity-provider operation can be rejected.
///
/// These mirror the provider's own error codes one-to-one so the UI can
/// surface a specific message for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthReason {
    /// The email address is malformed
    InvalidEmail,
    /// The account exists but has been disabled
    UserDisabled,
    /// No account exists for this email
    UserNotFound,
    /// The password does not match
    WrongPassword,
    /// Sign-up rejected: the email is already registered
    EmailInUse,
    /// Sign-up rejected: the password is too weak
    WeakPassword,
    /// Catch-all for malformed or expired credentials
    InvalidCredential,
}

impl AuthReason {
    /// A short user-facing message for this rejection.
    pub fn message(&self) -> &'static str {
        match self {
            AuthReason::InvalidEmail => "That email address looks invalid",
            AuthReason::UserDisabled => "This account has been disabled",
            AuthReason::UserNotFound => "No account found for that email",
            AuthReason::WrongPassword => "Incorrect password",
            AuthReason::EmailInUse => "An account already exists for that email",
            AuthReason::WeakPassword => "Please choose a stronger password",
            AuthReason::InvalidCredential => "Invalid credentials",
        }
    }
}

impl std::fmt::Display for AuthReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Core error type for VibeMix
#[derive(Error, Debug)]
pub enum VibeError {
    /// Playlist generation was requested with a blank prompt
    #[error("Describe your vibe or mood first")]
    EmptyPrompt,

    /// Save was requested but no generated playlist is pending
    #[error("No playlist to save")]
    NoCandidate,

    /// The operation requires a signed-in identity
    #[error("Sign in to manage favorites")]
    Unauthenticated,

    /// The remote store could not be reached or refused the request
    #[error("Favorites store unavailable: {0}")]
    StoreUnavailable(String),

    /// No playlist document with this id is owned by the caller
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Removing the last song is forbidden; delete the playlist instead
    #[error("Cannot remove the last song from playlist {0}")]
    LastSong(PlaylistId),

    /// Song index outside the playlist bounds
    #[error("Song index {index} out of range (playlist has {len} songs)")]
    SongIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of songs in the playlist
        len: usize,
    },

    /// The stored link is not a recognized external-video URL shape
    #[error("Not a playable video link: {0}")]
    InvalidLink(String),

    /// The identity provider rejected the request
    #[error("Authentication failed: {0}")]
    Auth(AuthReason),

    /// I/O errors (local favorites file)
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl VibeError {
    /// Create a store-unavailable error
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    /// Create a not-found error for a playlist id
    pub fn playlist_not_found(id: impl Into<String>) -> Self {
        Self::PlaylistNotFound(PlaylistId::new(id))
    }

    /// True when the failure was local validation, i.e. rejected before
    /// any network call was issued.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::EmptyPrompt
                | Self::NoCandidate
                | Self::Unauthenticated
                | Self::LastSong(_)
                | Self::SongIndexOutOfRange { .. }
                | Self::InvalidLink(_)
        )
    }
}
