//! Parsing raw caller records into [`EventInput`].

use crate::types::EventInput;

/// Separator for the `title | description | category | city` shorthand.
pub const FIELD_SEPARATOR: char = '|';

const MAX_FIELDS: usize = 4;

/// Error type for input parsing.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("invalid event json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected at most 4 fields, got {0}")]
    TooManyFields(usize),
}

impl EventInput {
    /// Parse one JSON object. Unknown keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self, InputError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse the `title | description | category | city` shorthand.
    /// Trailing fields may be left off; blank fields become `None`.
    pub fn from_fields(raw: &str) -> Result<Self, InputError> {
        if raw.trim().is_empty() {
            return Err(InputError::Empty);
        }

        let fields: Vec<Option<String>> = raw
            .split(FIELD_SEPARATOR)
            .map(|f| Some(f.trim()).filter(|f| !f.is_empty()).map(str::to_owned))
            .collect();
        if fields.len() > MAX_FIELDS {
            return Err(InputError::TooManyFields(fields.len()));
        }

        let mut fields = fields.into_iter();
        Ok(Self {
            title: fields.next().flatten(),
            description: fields.next().flatten(),
            category: fields.next().flatten(),
            city: fields.next().flatten(),
        })
    }
}
