/// Playlist domain types
use crate::types::{OwnerId, PlaylistId, Song};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An unsaved, locally-held generated playlist awaiting persistence.
///
/// Created per generation request and replaced wholesale by the next
/// one. Promoted to a [`SavedPlaylist`] on save; the saved copy of
/// record is always the one fetched back from the store, never this
/// local object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDraft {
    /// The originating mood text
    pub prompt: String,

    /// Songs in display order (order carries no meaning)
    pub songs: Vec<Song>,

    /// Assigned at generation time, never mutated afterwards
    pub created_at: DateTime<Utc>,
}

impl PlaylistDraft {
    /// Create a draft stamped with the current time.
    ///
    /// Callers are expected to pass at least one song; the curation
    /// engine never produces an empty draw.
    pub fn new(prompt: impl Into<String>, songs: Vec<Song>) -> Self {
        debug_assert!(!songs.is_empty(), "a playlist always has at least one song");
        Self {
            prompt: prompt.into(),
            songs,
            created_at: Utc::now(),
        }
    }
}

/// A persisted playlist document.
///
/// `id` exists if and only if the playlist has been persisted; it is
/// the sole key for update and delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlaylist {
    /// Store-assigned document id
    pub id: PlaylistId,

    /// Owning identity
    pub owner_id: OwnerId,

    /// The originating mood text
    pub prompt: String,

    /// Songs in display order
    pub songs: Vec<Song>,

    /// Creation time of the original draft, preserved across save
    pub created_at: DateTime<Utc>,
}

impl SavedPlaylist {
    /// Build the persisted form of a draft once the store has assigned
    /// an id.
    pub fn from_draft(id: PlaylistId, owner_id: OwnerId, draft: PlaylistDraft) -> Self {
        Self {
            id,
            owner_id,
            prompt: draft.prompt,
            songs: draft.songs,
            created_at: draft.created_at,
        }
    }
}

/// Sort a favorites collection into display order: most recent first.
///
/// The store makes no ordering guarantee, so this must be re-applied
/// after every fetch.
pub fn sort_most_recent_first(playlists: &mut [SavedPlaylist]) {
    playlists.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn song(n: &str) -> Song {
        Song::new(n, "Artist", "https://example.com/watch?v=abc12345678")
    }

    #[test]
    fn draft_is_stamped_at_creation() {
        let draft = PlaylistDraft::new("rainy sunday", vec![song("a")]);
        assert_eq!(draft.prompt, "rainy sunday");
        assert!(draft.created_at <= Utc::now());
    }

    #[test]
    fn saved_playlist_preserves_draft_created_at() {
        let draft = PlaylistDraft::new("focus", vec![song("a"), song("b")]);
        let stamp = draft.created_at;
        let saved =
            SavedPlaylist::from_draft(PlaylistId::new("p1"), OwnerId::new("u1"), draft);
        assert_eq!(saved.created_at, stamp);
        assert_eq!(saved.songs.len(), 2);
    }

    #[test]
    fn sort_puts_most_recent_first() {
        let mk = |id: &str, ts| SavedPlaylist {
            id: PlaylistId::new(id),
            owner_id: OwnerId::new("u1"),
            prompt: String::from("p"),
            songs: vec![song("a")],
            created_at: ts,
        };
        let old = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mid = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let new = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();

        let mut list = vec![mk("b", mid), mk("c", new), mk("a", old)];
        sort_most_recent_first(&mut list);

        let ids: Vec<_> = list.iter().map(|p| p.id.as_str().to_string()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }
}
