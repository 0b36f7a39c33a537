//! Rule-based event enrichment.
//!
//! Maps free-text event fields (title, description, category) to a semantic
//! profile: event type, genre and mood tags, a short description, vibe scores
//! and an audience estimate. Deterministic, no I/O, no model calls.

pub mod classify;
pub mod enrich;
pub mod estimate;
pub mod input;
pub mod summary;
pub mod types;

pub use enrich::{enrich, enrich_batch};
pub use input::InputError;
pub use types::{Audience, EnrichedProfile, EventInput, EventType, Genre, Mood, Vibe};
