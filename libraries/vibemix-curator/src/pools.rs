//! Fixed candidate song pools, one per mood category.
//!
//! Pool contents are static data; the mixed pool is the catch-all used
//! when no category keyword matches.

use vibemix_core::Song;

/// The six mood categories a prompt can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolId {
    /// relax / calm / chill
    Relax,
    /// workout / energy / upbeat
    Workout,
    /// sad / melancholy / cry
    Sad,
    /// happy / joy / celebrate
    Happy,
    /// 90s / nostalgia
    Nineties,
    /// Catch-all when no category keyword is present
    Mixed,
}

fn song(name: &str, artist: &str, video_id: &str) -> Song {
    Song::new(
        name,
        artist,
        format!("https://www.youtube.com/watch?v={video_id}"),
    )
}

/// The candidate songs for a mood category.
pub fn pool_songs(pool: PoolId) -> Vec<Song> {
    match pool {
        PoolId::Relax => vec![
            song("Weightless", "Marconi Union", "UfcAVejslrU"),
            song("Sunset Lover", "Petit Biscuit", "wuCK-oiE3rM"),
            song("Dreams", "Fleetwood Mac", "mrZRURcb1cM"),
            song("Bloom", "The Paper Kites", "8inJtTG_DuU"),
            song("Holocene", "Bon Iver", "TWcyIpul8OE"),
        ],
        PoolId::Workout => vec![
            song("Till I Collapse", "Eminem", "ytQ5CYE1VZw"),
            song("Eye of the Tiger", "Survivor", "btPJPFnesV4"),
            song("Stronger", "Kanye West", "PsO6ZnUZI0g"),
            song("Remember the Name", "Fort Minor", "VDvr08sCPOc"),
            song("Lose Yourself", "Eminem", "_Yhyp-_hX2s"),
        ],
        PoolId::Sad => vec![
            song("Someone Like You", "Adele", "hLQl3WQQoQ0"),
            song("The Night We Met", "Lord Huron", "KtlgYxa6BMU"),
            song("Skinny Love", "Bon Iver", "ssdgFoHLwnk"),
            song("Hurt", "Johnny Cash", "8AHCfZTRGiI"),
            song("Mad World", "Gary Jules", "4N3N1MlvVc4"),
        ],
        PoolId::Happy => vec![
            song("Happy", "Pharrell Williams", "ZbZSe6N_BXs"),
            song("Good Vibrations", "The Beach Boys", "Eab_beh07HU"),
            song("Don't Stop Me Now", "Queen", "HgzGwKwLmgM"),
            song("Walking on Sunshine", "Katrina and the Waves", "iPUmE-tne5U"),
            song("I Wanna Dance with Somebody", "Whitney Houston", "eH3giaIzONA"),
        ],
        PoolId::Nineties => vec![
            song("Smells Like Teen Spirit", "Nirvana", "hTWKbfoikeg"),
            song("Wonderwall", "Oasis", "bx1Bh8ZvH84"),
            song("No Scrubs", "TLC", "FrLequ6dUdM"),
            song("Wannabe", "Spice Girls", "gJLIiF15wjQ"),
            song("Black Hole Sun", "Soundgarden", "3mbBbFH9fAg"),
        ],
        PoolId::Mixed => vec![
            song("Blinding Lights", "The Weeknd", "4NRXx6U8ABQ"),
            song("Levitating", "Dua Lipa", "TUVcZfQe-Kw"),
            song("Heat Waves", "Glass Animals", "mRD0-GxqHVo"),
            song("As It Was", "Harry Styles", "H5v3kku4y6Q"),
            song("Anti-Hero", "Taylor Swift", "b1kbLwvqugk"),
            song("Flowers", "Miley Cyrus", "G7KNmW9a75Y"),
        ],
    }
}
