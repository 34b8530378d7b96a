//! Playable-identifier resolution.
//!
//! Extracts the canonical 11-character video id from the URL shapes the
//! external player accepts. Unrecognized shapes resolve to `None` and
//! the caller must treat that as a hard stop, never attempt playback.

use url::Url;

/// Length of a canonical video id.
const VIDEO_ID_LEN: usize = 11;

/// Hosts whose first path segment is itself the video id.
const SHORT_HOSTS: &[&str] = &["youtu.be", "www.youtu.be"];

/// Path segments that are followed by a video id.
const ID_SEGMENTS: &[&str] = &["embed", "shorts", "v"];

fn is_video_id(candidate: &str) -> bool {
    candidate.len() == VIDEO_ID_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Extract the canonical video id from an external-video URL.
///
/// Recognized shapes:
/// - `…/watch?v=<id>` (a `v` query parameter on any path)
/// - `youtu.be/<id>` (short-host form)
/// - `…/embed/<id>`, `…/shorts/<id>`, `…/v/<id>`
///
/// Returns `None` for malformed URLs and anything whose candidate id is
/// not exactly 11 characters of `[A-Za-z0-9_-]`.
pub fn resolve_playable_id(link: &str) -> Option<String> {
    let parsed = Url::parse(link).ok()?;

    // `v` query parameter
    if let Some((_, id)) = parsed.query_pairs().find(|(key, _)| key == "v") {
        if is_video_id(&id) {
            return Some(id.into_owned());
        }
    }

    let mut segments = parsed.path_segments()?.filter(|s| !s.is_empty());

    // Short-host form: the first segment is the id
    if let Some(host) = parsed.host_str() {
        if SHORT_HOSTS.contains(&host) {
            let candidate = segments.next()?;
            return is_video_id(candidate).then(|| candidate.to_string());
        }
    }

    // Segment form: the id follows a known marker segment
    let mut previous: Option<&str> = None;
    for segment in segments {
        if let Some(marker) = previous {
            if ID_SEGMENTS.contains(&marker) && is_video_id(segment) {
                return Some(segment.to_string());
            }
        }
        previous = Some(segment);
    }

    None
}

/// The canonical external watch URL for a video id, used when the
/// embedded player cannot play it and the user is sent to the source
/// site instead.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}
