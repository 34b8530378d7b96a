//! VibeMix - Playback Session
//!
//! Resolves playable identifiers from stored external-video links and
//! manages the single active playback handle:
//! - Canonical id extraction from known URL shapes (`resolve_playable_id`)
//! - Lazy player construction deferred until the widget reports
//!   readiness, with queued one-shot open requests
//! - Widget error-code handling (embedding restricted, not found)
//!
//! The external player widget itself is provided via the
//! [`VideoPlayer`] and [`PlayerFactory`] traits; this crate never
//! touches a rendering layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod link;
mod session;

pub use error::{PlaybackError, Result};
pub use link::{resolve_playable_id, watch_url};
pub use session::{
    PlaybackSession, PlayerErrorAction, PlayerErrorCode, PlayerFactory, VideoPlayer,
    CLOSE_HIDE_DELAY,
};
