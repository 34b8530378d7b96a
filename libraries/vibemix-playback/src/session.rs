//! Playback session.
//!
//! At most one playback handle exists at a time. Construction is
//! deferred until the external widget reports readiness; an open
//! request arriving before that is queued as an explicit one-shot and a
//! later request replaces it (logged, never silently dropped).

use crate::error::{PlaybackError, Result};
use crate::link::{resolve_playable_id, watch_url};
use std::time::Duration;
use tracing::{debug, warn};
use vibemix_core::Song;

/// Cosmetic delay before the presentation surface is hidden after
/// close, so a close transition can finish. Not a correctness
/// requirement; the view layer owns the actual timer.
pub const CLOSE_HIDE_DELAY: Duration = Duration::from_millis(300);

/// An active handle to the external player widget.
pub trait VideoPlayer {
    /// Load a different video into the existing player.
    fn load(&mut self, video_id: &str) -> Result<()>;

    /// Stop playback.
    fn stop(&mut self) -> Result<()>;
}

/// Constructs a player bound to the presentation surface.
///
/// Invoked at most once per session lifetime per player, and only after
/// the widget's readiness callback has fired.
pub trait PlayerFactory {
    /// Build a player starting at the given video id.
    fn create(&mut self, initial_video_id: &str) -> Result<Box<dyn VideoPlayer>>;
}

/// Widget error conditions the session handles specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerErrorCode {
    /// Embedding is disabled or restricted for this video
    EmbeddingRestricted,
    /// The video does not exist
    VideoNotFound,
    /// Any other code; left to the widget's default behavior
    Other(i32),
}

impl PlayerErrorCode {
    /// Classify a raw widget error code.
    pub fn from_code(code: i32) -> Self {
        match code {
            101 | 150 => Self::EmbeddingRestricted,
            100 => Self::VideoNotFound,
            other => Self::Other(other),
        }
    }
}

/// What the caller should do after the session has handled a widget
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerErrorAction {
    /// Session closed; send the user to the external site
    RedirectToSource {
        /// Canonical watch URL for the failed video
        url: String,
    },
    /// Session closed; show a not-found message
    ShowNotFound,
    /// Session untouched; the widget's default behavior applies
    LeaveToWidget,
}

/// Manages the single active playback handle.
pub struct PlaybackSession {
    factory: Box<dyn PlayerFactory>,
    player: Option<Box<dyn VideoPlayer>>,
    ready: bool,
    pending: Option<String>,
    current: Option<String>,
    open: bool,
}

impl PlaybackSession {
    /// Create a session; the widget is not yet ready.
    pub fn new(factory: Box<dyn PlayerFactory>) -> Self {
        Self {
            factory,
            player: None,
            ready: false,
            pending: None,
            current: None,
            open: false,
        }
    }

    /// Whether the presentation surface is currently shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The id of the video currently targeted, if any.
    pub fn current_video_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The widget's one-time readiness callback.
    ///
    /// Flushes the queued open request, if one arrived early.
    pub fn notify_ready(&mut self) -> Result<()> {
        self.ready = true;
        if let Some(video_id) = self.pending.take() {
            debug!(video_id = %video_id, "Flushing queued open request");
            self.start(&video_id)?;
        }
        Ok(())
    }

    /// Open playback for a song.
    ///
    /// Resolves the playable id from the stored link (hard stop on
    /// unrecognized shapes), then either retargets the existing handle
    /// in place, constructs one lazily, or queues the request until the
    /// widget is ready.
    pub fn open(&mut self, song: &Song) -> Result<()> {
        let video_id = resolve_playable_id(&song.playable_link)
            .ok_or_else(|| PlaybackError::InvalidLink(song.playable_link.clone()))?;

        if !self.ready {
            if let Some(replaced) = self.pending.replace(video_id) {
                warn!(replaced = %replaced, "Widget not ready; replacing queued open request");
            } else {
                debug!("Widget not ready; queueing open request");
            }
            return Ok(());
        }

        self.start(&video_id)
    }

    /// Stop playback and mark the surface for hiding.
    ///
    /// The surface itself disappears after [`CLOSE_HIDE_DELAY`].
    pub fn close(&mut self) -> Result<()> {
        self.pending = None;
        self.open = false;
        self.current = None;
        if let Some(player) = self.player.as_mut() {
            player.stop()?;
        }
        Ok(())
    }

    /// Handle a widget error callback.
    ///
    /// The two embedding-restricted codes close the session and
    /// redirect to the source site; not-found closes with a message;
    /// everything else is left alone.
    pub fn handle_player_error(&mut self, code: i32) -> Result<PlayerErrorAction> {
        match PlayerErrorCode::from_code(code) {
            PlayerErrorCode::EmbeddingRestricted => {
                let url = self.current.as_deref().map(watch_url);
                self.close()?;
                match url {
                    Some(url) => Ok(PlayerErrorAction::RedirectToSource { url }),
                    // Error with nothing targeted: nothing to redirect to
                    None => Ok(PlayerErrorAction::ShowNotFound),
                }
            }
            PlayerErrorCode::VideoNotFound => {
                self.close()?;
                Ok(PlayerErrorAction::ShowNotFound)
            }
            PlayerErrorCode::Other(code) => {
                debug!(code, "Unhandled widget error code");
                Ok(PlayerErrorAction::LeaveToWidget)
            }
        }
    }

    fn start(&mut self, video_id: &str) -> Result<()> {
        match self.player.as_mut() {
            Some(player) => player.load(video_id)?,
            None => {
                debug!(video_id = %video_id, "Constructing player");
                self.player = Some(self.factory.create(video_id)?);
            }
        }
        self.current = Some(video_id.to_string());
        self.open = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct WidgetLog {
        created_with: Vec<String>,
        loaded: Vec<String>,
        stops: usize,
    }

    struct FakePlayer {
        log: Rc<RefCell<WidgetLog>>,
    }

    impl VideoPlayer for FakePlayer {
        fn load(&mut self, video_id: &str) -> Result<()> {
            self.log.borrow_mut().loaded.push(video_id.to_string());
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            self.log.borrow_mut().stops += 1;
            Ok(())
        }
    }

    struct FakeFactory {
        log: Rc<RefCell<WidgetLog>>,
    }

    impl PlayerFactory for FakeFactory {
        fn create(&mut self, initial_video_id: &str) -> Result<Box<dyn VideoPlayer>> {
            self.log
                .borrow_mut()
                .created_with
                .push(initial_video_id.to_string());
            Ok(Box::new(FakePlayer {
                log: Rc::clone(&self.log),
            }))
        }
    }

    fn session() -> (Rc<RefCell<WidgetLog>>, PlaybackSession) {
        let log = Rc::new(RefCell::new(WidgetLog::default()));
        let session = PlaybackSession::new(Box::new(FakeFactory {
            log: Rc::clone(&log),
        }));
        (log, session)
    }

    fn song(video_id: &str) -> Song {
        Song::new(
            "Song",
            "Artist",
            format!("https://www.youtube.com/watch?v={video_id}"),
        )
    }

    #[test]
    fn open_before_ready_is_queued_not_dropped() {
        let (log, mut session) = session();

        session.open(&song("abc12345678")).unwrap();
        assert!(log.borrow().created_with.is_empty());
        assert!(!session.is_open());

        session.notify_ready().unwrap();
        assert_eq!(log.borrow().created_with, ["abc12345678"]);
        assert!(session.is_open());
        assert_eq!(session.current_video_id(), Some("abc12345678"));
    }

    #[test]
    fn second_early_open_replaces_the_queued_one() {
        let (log, mut session) = session();

        session.open(&song("aaaaaaaaaaa")).unwrap();
        session.open(&song("bbbbbbbbbbb")).unwrap();
        session.notify_ready().unwrap();

        // Only the latest request reaches the widget
        assert_eq!(log.borrow().created_with, ["bbbbbbbbbbb"]);
    }

    #[test]
    fn existing_handle_is_retargeted_in_place() {
        let (log, mut session) = session();
        session.notify_ready().unwrap();

        session.open(&song("aaaaaaaaaaa")).unwrap();
        session.open(&song("bbbbbbbbbbb")).unwrap();

        let log = log.borrow();
        assert_eq!(log.created_with, ["aaaaaaaaaaa"]);
        assert_eq!(log.loaded, ["bbbbbbbbbbb"]);
    }

    #[test]
    fn unresolvable_link_is_a_hard_stop() {
        let (log, mut session) = session();
        session.notify_ready().unwrap();

        let bad = Song::new("Song", "Artist", "https://example.com/not-a-video");
        let result = session.open(&bad);

        assert!(matches!(result, Err(PlaybackError::InvalidLink(_))));
        assert!(log.borrow().created_with.is_empty());
        assert!(!session.is_open());
    }

    #[test]
    fn close_stops_playback_and_clears_target() {
        let (log, mut session) = session();
        session.notify_ready().unwrap();
        session.open(&song("abc12345678")).unwrap();

        session.close().unwrap();

        assert_eq!(log.borrow().stops, 1);
        assert!(!session.is_open());
        assert_eq!(session.current_video_id(), None);
    }

    #[test]
    fn embedding_restricted_codes_redirect_to_source() {
        for code in [101, 150] {
            let (_log, mut session) = session();
            session.notify_ready().unwrap();
            session.open(&song("abc12345678")).unwrap();

            let action = session.handle_player_error(code).unwrap();
            assert_eq!(
                action,
                PlayerErrorAction::RedirectToSource {
                    url: "https://www.youtube.com/watch?v=abc12345678".to_string()
                }
            );
            assert!(!session.is_open());
        }
    }

    #[test]
    fn not_found_code_closes_with_message() {
        let (_log, mut session) = session();
        session.notify_ready().unwrap();
        session.open(&song("abc12345678")).unwrap();

        let action = session.handle_player_error(100).unwrap();
        assert_eq!(action, PlayerErrorAction::ShowNotFound);
        assert!(!session.is_open());
    }

    #[test]
    fn other_codes_are_left_to_the_widget() {
        let (log, mut session) = session();
        session.notify_ready().unwrap();
        session.open(&song("abc12345678")).unwrap();

        let action = session.handle_player_error(2).unwrap();
        assert_eq!(action, PlayerErrorAction::LeaveToWidget);
        assert!(session.is_open());
        assert_eq!(log.borrow().stops, 0);
    }
}
