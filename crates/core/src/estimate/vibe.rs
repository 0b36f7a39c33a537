use super::{is_dance, is_listening};
use crate::classify::lexicon::{self, VIBE_OVERRIDES};
use crate::types::{EventType, Genre, Vibe};

/// Dance genres never lift energy or social above this.
const DANCE_CEILING: u8 = 95;
const DANCE_ENERGY_BOOST: u8 = 10;
const DANCE_SOCIAL_BOOST: u8 = 5;

/// Listening genres never drop energy below this or lift intimacy above 80.
const LISTENING_ENERGY_FLOOR: u8 = 30;
const LISTENING_INTIMACY_CEILING: u8 = 80;
const LISTENING_ENERGY_DROP: u8 = 20;
const LISTENING_INTIMACY_BOOST: u8 = 20;

/// Estimate vibe scores from the event type, then adjust by genre.
///
/// The type table replaces all four defaults. The dance and listening
/// adjustments are independent and may both apply. Exclusivity is only ever
/// set by the type table.
pub fn estimate_vibe(event_type: EventType, genres: &[Genre]) -> Vibe {
    let mut vibe = lexicon::lookup(VIBE_OVERRIDES, &event_type).unwrap_or_default();

    if is_dance(genres) {
        vibe.energy = DANCE_CEILING.min(vibe.energy.saturating_add(DANCE_ENERGY_BOOST));
        vibe.social = DANCE_CEILING.min(vibe.social.saturating_add(DANCE_SOCIAL_BOOST));
    }

    if is_listening(genres) {
        vibe.energy = LISTENING_ENERGY_FLOOR.max(vibe.energy.saturating_sub(LISTENING_ENERGY_DROP));
        vibe.intimacy =
            LISTENING_INTIMACY_CEILING.min(vibe.intimacy.saturating_add(LISTENING_INTIMACY_BOOST));
    }

    vibe
}
