//! Enrichment pipeline — raw event fields in, semantic profile out.
//!
//! Stateless and synchronous; safe to call from any number of threads.

use crate::classify::{classify_event_type, extract_genres, extract_moods};
use crate::estimate::{estimate_audience, estimate_vibe};
use crate::summary;
use crate::types::{EnrichedProfile, EventInput};

/// Annotate one event with type, tags, summary, vibe and audience.
pub fn enrich(input: &EventInput) -> EnrichedProfile {
    let text = input.search_text();

    let event_type = classify_event_type(input.category(), &text);
    let genre = extract_genres(&text);
    let mood = extract_moods(&text);
    let short_description = short_description(input);
    let vibe = estimate_vibe(event_type, &genre);
    let audience = estimate_audience(event_type, &genre);

    tracing::debug!(
        %event_type,
        genres = genre.len(),
        moods = mood.len(),
        has_summary = short_description.is_some(),
        "event enriched"
    );

    EnrichedProfile {
        event_type,
        genre,
        mood,
        short_description,
        vibe,
        audience,
    }
}

/// Enrich a batch of events, preserving input order.
pub fn enrich_batch(inputs: &[EventInput]) -> Vec<EnrichedProfile> {
    inputs.iter().map(enrich).collect()
}

fn short_description(input: &EventInput) -> Option<String> {
    match (input.description(), input.title()) {
        (Some(description), _) => Some(summary::summarize(description)),
        (None, Some(title)) => Some(summary::truncate_title(title)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventType, Genre, Mood, Vibe};

    #[test]
    fn empty_input_yields_defaults() {
        let profile = enrich(&EventInput::default());
        assert_eq!(profile.event_type, EventType::Other);
        assert!(profile.genre.is_empty());
        assert!(profile.mood.is_empty());
        assert_eq!(profile.short_description, None);
        assert_eq!(profile.vibe, Vibe::new(50, 50, 30, 70));
        assert_eq!(profile.audience.age_range, (18, 65));
        assert!(profile.audience.target_audience.is_empty());
    }

    #[test]
    fn summary_prefers_description() {
        let profile = enrich(&EventInput::new("Title", "Body text."));
        assert_eq!(profile.short_description.as_deref(), Some("Body text."));
    }

    #[test]
    fn summary_falls_back_to_title() {
        let input = EventInput {
            title: Some("Only a title".into()),
            description: Some(String::new()),
            ..EventInput::default()
        };
        assert_eq!(enrich(&input).short_description.as_deref(), Some("Only a title"));
    }

    #[test]
    fn city_is_ignored() {
        let base = EventInput::new("Salsa Night", "Latin beats and romantic candlelight");
        let berlin = enrich(&base.clone().with_city("Berlin"));
        let havana = enrich(&base.with_city("Havana"));
        assert_eq!(berlin, havana);
        assert_eq!(berlin.genre, vec![Genre::Latin]);
        assert_eq!(berlin.mood, vec![Mood::Romantic]);
    }

    #[test]
    fn batch_preserves_order() {
        let inputs = vec![
            EventInput::default().with_category("theater"),
            EventInput::default().with_category("festival"),
            EventInput::default(),
        ];
        let types: Vec<_> = enrich_batch(&inputs).iter().map(|p| p.event_type).collect();
        assert_eq!(types, [EventType::Theater, EventType::Festival, EventType::Other]);
    }
}
