/// ID types for VibeMix entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Owner (authenticated user) identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Create a new owner ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playlist document identifier
///
/// Assigned by the store when a draft is persisted; stable for the
/// document's lifetime and the sole key for update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Create a new playlist ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random playlist ID (local store paths)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_id_generation_creates_unique_ids() {
        let id1 = PlaylistId::generate();
        let id2 = PlaylistId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn owner_id_display() {
        let id = OwnerId::new("user-42");
        assert_eq!(format!("{}", id), "user-42");
        assert_eq!(id.as_str(), "user-42");
    }
}
