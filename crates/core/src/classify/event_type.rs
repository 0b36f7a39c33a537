use super::lexicon::{self, CATEGORY_MAP, TYPE_KEYWORDS};
use crate::types::EventType;

/// Classify an event from its category label, falling back to keyword
/// inference over `text` (already lowercased title + description).
///
/// A known category always wins, even when the text says otherwise.
/// Unknown or empty categories fall through to the keyword rules.
pub fn classify_event_type(category: Option<&str>, text: &str) -> EventType {
    if let Some(category) = category.filter(|c| !c.is_empty()) {
        let key = category.to_lowercase();
        if let Some(event_type) = lexicon::lookup(CATEGORY_MAP, &key.as_str()) {
            tracing::trace!(%event_type, category = %key, "event type from category");
            return event_type;
        }
    }

    match lexicon::first_match(TYPE_KEYWORDS, text) {
        Some(event_type) => {
            tracing::trace!(%event_type, "event type from keywords");
            event_type
        }
        None => EventType::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup_is_case_insensitive() {
        assert_eq!(classify_event_type(Some("Konzert"), ""), EventType::Concert);
        assert_eq!(classify_event_type(Some("CLUB"), ""), EventType::ClubNight);
        assert_eq!(classify_event_type(Some("Ausstellung"), ""), EventType::Exhibition);
    }

    #[test]
    fn category_beats_contradicting_text() {
        let text = "big festival with a stand-up comedy stage";
        assert_eq!(classify_event_type(Some("theatre"), text), EventType::Theater);
    }

    #[test]
    fn unknown_category_falls_back_to_keywords() {
        assert_eq!(
            classify_event_type(Some("misc"), "jazz konzert im park"),
            EventType::Concert
        );
    }

    #[test]
    fn empty_category_is_absent() {
        assert_eq!(classify_event_type(Some(""), "seminar on rust"), EventType::Workshop);
    }

    #[test]
    fn keyword_priority() {
        assert_eq!(classify_event_type(None, "summer festival party"), EventType::Festival);
        assert_eq!(classify_event_type(None, "friday night party"), EventType::ClubNight);
        assert_eq!(classify_event_type(None, "tech meetup and networking"), EventType::Networking);
        assert_eq!(classify_event_type(None, "stand-up special"), EventType::Comedy);
        assert_eq!(classify_event_type(None, "birthday party"), EventType::Party);
    }

    #[test]
    fn no_match_is_other() {
        assert_eq!(classify_event_type(None, "a quiet afternoon"), EventType::Other);
        assert_eq!(classify_event_type(None, " "), EventType::Other);
    }
}
