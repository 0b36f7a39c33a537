use super::is_dance;
use crate::classify::lexicon::AUDIENCE_OVERRIDES;
use crate::types::{Audience, EventType, Genre};

const DANCE_AGE_RANGE: (u8, u8) = (18, 35);
const DANCE_LABELS: &[&str] = &["students", "party-goers"];

/// Estimate the likely audience from the event type and genres.
///
/// Dance genres override the age band and append their labels after the
/// type labels. Labels are not deduplicated.
pub fn estimate_audience(event_type: EventType, genres: &[Genre]) -> Audience {
    let mut audience = Audience::default();

    let row = AUDIENCE_OVERRIDES.iter().find(|(t, ..)| *t == event_type);
    if let Some((_, age_range, labels)) = row {
        audience.age_range = *age_range;
        audience.target_audience.extend(labels.iter().map(|l| l.to_string()));
    }

    if is_dance(genres) {
        audience.age_range = DANCE_AGE_RANGE;
        audience.target_audience.extend(DANCE_LABELS.iter().map(|l| l.to_string()));
    }

    audience
}
