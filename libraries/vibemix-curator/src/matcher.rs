//! Keyword mood matcher.
//!
//! Pure substring matching over the lower-cased prompt. Categories are
//! tested in a fixed priority order and the first hit wins; multiple
//! keyword sets in one prompt never combine. The order is a deliberate
//! tie-break and must stay exactly as-is for reproducible behavior.

use crate::pools::PoolId;

/// Keyword table, in priority order. "nostalg" is a stem so both
/// "nostalgia" and "nostalgic" hit.
const CATEGORIES: &[(PoolId, &[&str])] = &[
    (PoolId::Relax, &["relax", "calm", "chill"]),
    (PoolId::Workout, &["workout", "energy", "upbeat"]),
    (PoolId::Sad, &["sad", "melancholy", "cry"]),
    (PoolId::Happy, &["happy", "joy", "celebrate"]),
    (PoolId::Nineties, &["90s", "nostalg"]),
];

/// Map a free-text mood prompt to a song pool.
///
/// Deterministic for identical input; falls back to the mixed pool
/// when no category keyword is present.
pub fn match_mood(prompt: &str) -> PoolId {
    let lowered = prompt.to_lowercase();
    for (pool, keywords) in CATEGORIES {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return *pool;
        }
    }
    PoolId::Mixed
}
