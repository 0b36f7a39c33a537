//! Rule-table estimators for vibe scores and audience.

pub mod audience;
pub mod vibe;

pub use audience::estimate_audience;
pub use vibe::estimate_vibe;

use crate::types::Genre;

/// Genres that push a profile toward the dance-floor end.
fn is_dance(genres: &[Genre]) -> bool {
    genres.iter().any(|g| matches!(g, Genre::Techno | Genre::House))
}

/// Genres that pull a profile toward a seated, listening crowd.
fn is_listening(genres: &[Genre]) -> bool {
    genres.iter().any(|g| matches!(g, Genre::Jazz | Genre::Classical))
}
