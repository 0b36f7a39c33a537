//! Text classification stages: event type, genres, moods.
//!
//! All stages are pure functions over lowercased text and the fixed tables in
//! [`lexicon`].

pub mod event_type;
pub mod lexicon;
pub mod tags;

pub use event_type::classify_event_type;
pub use tags::{extract_genres, extract_moods};
