//! Pure view description.
//!
//! A function from application state to a render description; the
//! actual rendering layer (DOM, TUI, tests) consumes the description
//! and owns nothing else.

use crate::state::AppState;
use vibemix_core::{SavedPlaylist, Song};

/// One rendered song row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRow {
    /// 1-based display number
    pub number: usize,
    /// Song title
    pub name: String,
    /// Performing artist
    pub artist: String,
    /// External playback link
    pub link: String,
}

/// The generator panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorView {
    /// Songs of the current candidate, if one exists
    pub songs: Vec<SongRow>,
    /// Whether the save control is shown and enabled
    pub can_save: bool,
    /// Whether the generate control is enabled
    pub controls_enabled: bool,
}

/// One favorites entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteView {
    /// Document id, for delete / remove-song actions
    pub id: String,
    /// The originating mood prompt, shown as the title
    pub title: String,
    /// Formatted creation date, e.g. "Mar 1, 2025 12:00 PM"
    pub date_label: String,
    /// Songs in display order
    pub songs: Vec<SongRow>,
    /// False when only one song remains (removal forbidden)
    pub can_remove_songs: bool,
}

/// The whole render description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Email of the signed-in identity, if any
    pub signed_in_as: Option<String>,
    /// Generator panel
    pub generator: GeneratorView,
    /// Favorites entries, most recent first
    pub favorites: Vec<FavoriteView>,
}

fn song_rows(songs: &[Song]) -> Vec<SongRow> {
    songs
        .iter()
        .enumerate()
        .map(|(i, s)| SongRow {
            number: i + 1,
            name: s.name.clone(),
            artist: s.artist.clone(),
            link: s.playable_link.clone(),
        })
        .collect()
}

fn favorite_view(playlist: &SavedPlaylist) -> FavoriteView {
    FavoriteView {
        id: playlist.id.as_str().to_string(),
        title: playlist.prompt.clone(),
        date_label: playlist
            .created_at
            .format("%b %-d, %Y %I:%M %p")
            .to_string(),
        songs: song_rows(&playlist.songs),
        can_remove_songs: playlist.songs.len() > 1,
    }
}

/// Derive the render description from the current state.
pub fn view(state: &AppState, favorites: &[SavedPlaylist]) -> View {
    View {
        signed_in_as: state.identity.as_ref().map(|i| i.email.clone()),
        generator: GeneratorView {
            songs: state
                .session
                .candidate()
                .map(|draft| song_rows(&draft.songs))
                .unwrap_or_default(),
            can_save: state.session.candidate().is_some() && !state.busy,
            controls_enabled: !state.busy,
        },
        favorites: favorites.iter().map(favorite_view).collect(),
    }
}
