//! Fixed classification tables.
//!
//! Every table is an ordered slice of pairs. Order is significant: type
//! inference takes the first matching rule, tag extraction emits tags in
//! declaration order.

use crate::types::{EventType, Genre, Mood, Vibe};

/// A tag (or type) and the substrings that signal it.
pub type KeywordRule<K> = (K, &'static [&'static str]);

/// Caller category label (lowercased) → canonical event type.
pub const CATEGORY_MAP: &[(&str, EventType)] = &[
    ("konzert", EventType::Concert),
    ("concert", EventType::Concert),
    ("festival", EventType::Festival),
    ("club", EventType::ClubNight),
    ("clubnacht", EventType::ClubNight),
    ("club-night", EventType::ClubNight),
    ("theater", EventType::Theater),
    ("theatre", EventType::Theater),
    ("sport", EventType::Sports),
    ("sports", EventType::Sports),
    ("workshop", EventType::Workshop),
    ("networking", EventType::Networking),
    ("ausstellung", EventType::Exhibition),
    ("exhibition", EventType::Exhibition),
    ("konferenz", EventType::Conference),
    ("conference", EventType::Conference),
    ("party", EventType::Party),
    ("comedy", EventType::Comedy),
];

/// Text-inference rules in priority order; first hit wins.
pub const TYPE_KEYWORDS: &[KeywordRule<EventType>] = &[
    (EventType::Festival, &["festival"]),
    (EventType::ClubNight, &["club", "night"]),
    (EventType::Concert, &["konzert", "concert"]),
    (EventType::Theater, &["theater", "theatre"]),
    (EventType::Sports, &["sport", "match"]),
    (EventType::Workshop, &["workshop", "seminar"]),
    (EventType::Networking, &["networking", "meetup"]),
    (EventType::Exhibition, &["ausstellung", "exhibition"]),
    (EventType::Conference, &["konferenz", "conference"]),
    (EventType::Comedy, &["comedy", "stand-up"]),
    (EventType::Party, &["party"]),
];

pub const GENRE_KEYWORDS: &[KeywordRule<Genre>] = &[
    (Genre::Techno, &["techno", "tech house", "minimal"]),
    (Genre::House, &["deep house", "house music", "afro house"]),
    (Genre::HipHop, &["hip hop", "hip-hop", "rap"]),
    (Genre::Rock, &["rock", "indie", "punk"]),
    (Genre::Pop, &["pop", "charts"]),
    (Genre::Jazz, &["jazz", "swing", "blues"]),
    (Genre::Electronic, &["electronic", "edm", "elektro"]),
    (Genre::Classical, &["classical", "klassik", "orchestra"]),
    (Genre::Reggae, &["reggae", "dancehall"]),
    (Genre::Latin, &["latin", "salsa", "reggaeton"]),
];

pub const MOOD_KEYWORDS: &[KeywordRule<Mood>] = &[
    (Mood::Energetic, &["energetic", "energie", "high energy", "wild"]),
    (Mood::Chill, &["chill", "relax", "entspannt", "lounge"]),
    (Mood::Romantic, &["romantic", "romantisch", "candlelight", "date night"]),
    (Mood::Party, &["party", "feiern", "rave"]),
    (Mood::Professional, &["business", "professional", "networking", "karriere"]),
    (Mood::Artistic, &["kunst", "artist", "gallery", "creative"]),
];

/// Per-type vibe scores. Each entry replaces all four defaults.
pub const VIBE_OVERRIDES: &[(EventType, Vibe)] = &[
    (EventType::Festival, Vibe::new(90, 30, 20, 95)),
    (EventType::ClubNight, Vibe::new(85, 40, 40, 90)),
    (EventType::Concert, Vibe::new(75, 50, 30, 80)),
    (EventType::Theater, Vibe::new(30, 80, 50, 40)),
    (EventType::Workshop, Vibe::new(40, 70, 40, 60)),
    (EventType::Networking, Vibe::new(50, 40, 50, 95)),
];

/// Per-type age band and the labels pushed onto the audience.
pub const AUDIENCE_OVERRIDES: &[(EventType, (u8, u8), &[&str])] = &[
    (EventType::Festival, (18, 35), &["students", "young professionals"]),
    (EventType::ClubNight, (18, 35), &["students", "young professionals"]),
    (EventType::Theater, (25, 70), &["professionals", "culture enthusiasts"]),
    (EventType::Workshop, (25, 55), &["professionals"]),
    (EventType::Conference, (25, 55), &["professionals"]),
    (EventType::Networking, (25, 50), &["professionals", "entrepreneurs"]),
];

/// Exact-key lookup in an ordered pair table.
pub fn lookup<K: PartialEq, V: Copy>(table: &[(K, V)], key: &K) -> Option<V> {
    table.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
}

/// First rule with any keyword contained in `text`.
pub fn first_match<K: Copy>(table: &[KeywordRule<K>], text: &str) -> Option<K> {
    table
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(key, _)| *key)
}

/// Every rule with any keyword contained in `text`, in table order.
pub fn all_matches<K: Copy>(table: &[KeywordRule<K>], text: &str) -> Vec<K> {
    table
        .iter()
        .filter(|(_, keywords)| contains_any(text, keywords))
        .map(|(key, _)| *key)
        .collect()
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
