//! Property-based tests for the curation engine.
//!
//! Verifies the sampler and matcher invariants across many random
//! inputs.

use proptest::prelude::*;
use std::collections::HashSet;
use vibemix_core::Song;
use vibemix_curator::{match_mood, sample_songs, MAX_PLAYLIST_SONGS};

// ===== Helpers =====

fn arbitrary_song() -> impl Strategy<Value = Song> {
    (
        "[A-Za-z ]{1,30}", // name
        "[A-Za-z ]{1,20}", // artist
        "[a-zA-Z0-9_-]{11}",
    )
        .prop_map(|(name, artist, id)| {
            Song::new(name, artist, format!("https://www.youtube.com/watch?v={id}"))
        })
}

fn arbitrary_pool() -> impl Strategy<Value = Vec<Song>> {
    prop::collection::vec(arbitrary_song(), 0..30)
}

// ===== Property Tests =====

proptest! {
    /// Property: the draw is always min(8, |pool|) songs
    #[test]
    fn draw_size_is_bounded(pool in arbitrary_pool()) {
        let drawn = sample_songs(&pool);
        prop_assert_eq!(drawn.len(), pool.len().min(MAX_PLAYLIST_SONGS));
    }

    /// Property: every drawn song originates from the pool and no pool
    /// slot is used twice (drawing is without replacement)
    #[test]
    fn draw_is_without_replacement(pool in arbitrary_pool()) {
        let drawn = sample_songs(&pool);

        let mut remaining: Vec<&Song> = pool.iter().collect();
        for song in &drawn {
            let pos = remaining.iter().position(|s| *s == song);
            prop_assert!(pos.is_some(), "drawn song not in pool");
            remaining.swap_remove(pos.unwrap());
        }
    }

    /// Property: a pool that fits the cap is returned whole
    #[test]
    fn small_pool_is_returned_whole(pool in prop::collection::vec(arbitrary_song(), 0..=8)) {
        let drawn = sample_songs(&pool);
        prop_assert_eq!(drawn.len(), pool.len());
    }

    /// Property: matching is a pure function of the lower-cased text
    #[test]
    fn matcher_is_deterministic(prompt in "[ -~]{0,80}") {
        let first = match_mood(&prompt);
        for _ in 0..5 {
            prop_assert_eq!(match_mood(&prompt), first);
        }
        prop_assert_eq!(match_mood(&prompt.to_uppercase()), first);
    }
}

/// Over repeated draws from an oversized pool, every song shows up
/// eventually; the sampler gives each song non-zero inclusion
/// probability.
#[test]
fn oversized_pool_coverage() {
    let pool: Vec<Song> = (0..16)
        .map(|i| {
            Song::new(
                format!("Song {i}"),
                "Artist",
                format!("https://www.youtube.com/watch?v=aaaaaaaaa{i:02}"),
            )
        })
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    for _ in 0..300 {
        for s in sample_songs(&pool) {
            seen.insert(s.name);
        }
    }
    assert_eq!(seen.len(), pool.len());
}
