/// Song domain type
use serde::{Deserialize, Serialize};

/// A single song entry in a playlist.
///
/// Immutable value with no identity beyond structural equality; the
/// same song may appear in any number of playlists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub name: String,

    /// Performing artist
    pub artist: String,

    /// External video URL the song can be played from
    pub playable_link: String,
}

impl Song {
    /// Create a new song
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        playable_link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            playable_link: playable_link.into(),
        }
    }
}
