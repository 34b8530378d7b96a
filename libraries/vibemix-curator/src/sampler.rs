//! Playlist sampler.
//!
//! Draws a bounded random subset from a matched pool using an explicit
//! Fisher-Yates permutation (`SliceRandom::shuffle`). A comparator-based
//! shuffle is a known correctness hazard (biased distribution) and is
//! never used here.

use rand::seq::SliceRandom;
use rand::thread_rng;
use vibemix_core::Song;

/// Maximum number of songs drawn into one playlist.
pub const MAX_PLAYLIST_SONGS: usize = 8;

/// Draw `min(8, |pool|)` songs from the pool, without replacement, in
/// random order.
///
/// When the pool holds eight songs or fewer the entire pool is
/// returned, order randomized.
pub fn sample_songs(pool: &[Song]) -> Vec<Song> {
    let mut songs = pool.to_vec();
    songs.shuffle(&mut thread_rng());
    songs.truncate(MAX_PLAYLIST_SONGS);
    songs
}
