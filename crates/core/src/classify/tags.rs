use super::lexicon::{self, GENRE_KEYWORDS, MOOD_KEYWORDS};
use crate::types::{Genre, Mood};

/// Every genre whose keywords occur in `text`, in table order.
pub fn extract_genres(text: &str) -> Vec<Genre> {
    let genres = lexicon::all_matches(GENRE_KEYWORDS, text);
    tracing::trace!(?genres, "genres extracted");
    genres
}

/// Every mood whose keywords occur in `text`, in table order.
pub fn extract_moods(text: &str) -> Vec<Mood> {
    let moods = lexicon::all_matches(MOOD_KEYWORDS, text);
    tracing::trace!(?moods, "moods extracted");
    moods
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genres_are_not_exclusive() {
        let genres = extract_genres("jazz brunch followed by a techno afterparty");
        assert_eq!(genres, vec![Genre::Techno, Genre::Jazz]);
    }

    #[test]
    fn genres_follow_table_order() {
        let genres = extract_genres("salsa, reggae and deep house");
        assert_eq!(genres, vec![Genre::House, Genre::Reggae, Genre::Latin]);
    }

    #[test]
    fn repeated_keywords_yield_one_genre() {
        assert_eq!(extract_genres("techno techno minimal tech house"), vec![Genre::Techno]);
    }

    #[test]
    fn plain_house_word_does_not_tag_house() {
        assert!(extract_genres("warehouse open house").is_empty());
    }

    #[test]
    fn moods_mix_languages() {
        let moods = extract_moods("entspannt feiern mit kunst");
        assert_eq!(moods, vec![Mood::Chill, Mood::Party, Mood::Artistic]);
    }

    #[test]
    fn no_keywords_no_tags() {
        assert!(extract_genres(" ").is_empty());
        assert!(extract_moods("an evening").is_empty());
    }
}
