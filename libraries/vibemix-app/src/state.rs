//! Application state.

use vibemix_core::Identity;
use vibemix_curator::SessionState;

/// The explicit application state owned by the [`crate::Controller`].
///
/// Replaces what would otherwise be global mutable module state; tests
/// construct a fresh one per test.
#[derive(Debug, Default)]
pub struct AppState {
    /// The signed-in identity, if any
    pub identity: Option<Identity>,

    /// The single unsaved candidate playlist
    pub session: SessionState,

    /// In-flight guard: true while a user action is settling.
    ///
    /// A UX affordance to deter accidental double-submission, not a
    /// correctness mechanism; every failure path resets it so the user
    /// can retry.
    pub busy: bool,
}

impl AppState {
    /// Fresh state: signed out, no candidate, idle.
    pub fn new() -> Self {
        Self::default()
    }
}
