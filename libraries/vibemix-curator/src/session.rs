//! Session playlist state.
//!
//! Holds zero or one candidate playlist. Each generation request
//! replaces the previous candidate outright; an unsaved candidate is
//! discarded without trace.

use crate::matcher::match_mood;
use crate::pools::pool_songs;
use crate::sampler::sample_songs;
use tracing::debug;
use vibemix_core::{PlaylistDraft, Result, VibeError};

/// The single "current" generated playlist awaiting an explicit save.
#[derive(Debug, Default)]
pub struct SessionState {
    candidate: Option<PlaylistDraft>,
}

impl SessionState {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh candidate from a mood prompt, replacing any
    /// existing one (overwrite, not merge).
    ///
    /// Fails with [`VibeError::EmptyPrompt`] when the trimmed prompt is
    /// empty; nothing is replaced in that case.
    pub fn generate(&mut self, prompt: &str) -> Result<&PlaylistDraft> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(VibeError::EmptyPrompt);
        }

        let pool = match_mood(prompt);
        let songs = sample_songs(&pool_songs(pool));
        debug!(?pool, songs = songs.len(), "Generated candidate playlist");

        Ok(self.candidate.insert(PlaylistDraft::new(prompt, songs)))
    }

    /// The current candidate, if one has been generated and not yet
    /// discarded.
    pub fn candidate(&self) -> Option<&PlaylistDraft> {
        self.candidate.as_ref()
    }

    /// Discard the candidate.
    ///
    /// Called once the favorites view model has confirmed persistence
    /// by reloading the saved copy from the store; the local object is
    /// never the copy of record.
    pub fn clear(&mut self) {
        self.candidate = None;
    }
}
