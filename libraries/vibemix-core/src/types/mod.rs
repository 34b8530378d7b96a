//! Domain types for VibeMix

mod identity;
mod ids;
mod playlist;
mod song;

pub use identity::Identity;
pub use ids::{OwnerId, PlaylistId};
pub use playlist::{sort_most_recent_first, PlaylistDraft, SavedPlaylist};
pub use song::Song;
