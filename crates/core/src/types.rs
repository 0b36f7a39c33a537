use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw event fields as supplied by the caller. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Carried for interface compatibility; no rule reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl EventInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Title, with an empty string treated as absent.
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// Description, with an empty string treated as absent.
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// Category, with an empty string treated as absent.
    pub fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    /// Lowercased `"{title} {description}"`, absent parts as empty strings.
    pub fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.title().unwrap_or_default(),
            self.description().unwrap_or_default()
        )
        .to_lowercase()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Canonical single-label event classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Concert,
    Festival,
    ClubNight,
    Theater,
    Sports,
    Workshop,
    Networking,
    Exhibition,
    Conference,
    Party,
    Comedy,
    Other,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Concert => "concert",
            Self::Festival => "festival",
            Self::ClubNight => "club-night",
            Self::Theater => "theater",
            Self::Sports => "sports",
            Self::Workshop => "workshop",
            Self::Networking => "networking",
            Self::Exhibition => "exhibition",
            Self::Conference => "conference",
            Self::Party => "party",
            Self::Comedy => "comedy",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Musical style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Techno,
    House,
    HipHop,
    Rock,
    Pop,
    Jazz,
    Electronic,
    Classical,
    Reggae,
    Latin,
}

impl Genre {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Techno => "techno",
            Self::House => "house",
            Self::HipHop => "hip-hop",
            Self::Rock => "rock",
            Self::Pop => "pop",
            Self::Jazz => "jazz",
            Self::Electronic => "electronic",
            Self::Classical => "classical",
            Self::Reggae => "reggae",
            Self::Latin => "latin",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotional tone tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Energetic,
    Chill,
    Romantic,
    Party,
    Professional,
    Artistic,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Energetic => "energetic",
            Self::Chill => "chill",
            Self::Romantic => "romantic",
            Self::Party => "party",
            Self::Professional => "professional",
            Self::Artistic => "artistic",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four atmosphere scores, nominally 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vibe {
    pub energy: u8,
    pub intimacy: u8,
    pub exclusivity: u8,
    pub social: u8,
}

impl Vibe {
    pub const fn new(energy: u8, intimacy: u8, exclusivity: u8, social: u8) -> Self {
        Self {
            energy,
            intimacy,
            exclusivity,
            social,
        }
    }
}

impl Default for Vibe {
    fn default() -> Self {
        Self::new(50, 50, 30, 70)
    }
}

/// Inferred age band and audience labels. Labels may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    pub age_range: (u8, u8),
    pub target_audience: Vec<String>,
}

impl Default for Audience {
    fn default() -> Self {
        Self {
            age_range: (18, 65),
            target_audience: Vec::new(),
        }
    }
}

/// Structured semantic profile produced by [`crate::enrich::enrich`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProfile {
    pub event_type: EventType,
    pub genre: Vec<Genre>,
    pub mood: Vec<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub vibe: Vibe,
    pub audience: Audience,
}
