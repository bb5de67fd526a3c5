//! Optional text cell with an explicit absent marker.

use serde::{Deserialize, Serialize};

use crate::constants::{MISSING_FILL_MARKERS, MISSING_SENTINEL};

/// A text field that may be absent.
///
/// `Absent` (no cell, or a whitespace-only cell) is kept distinct from the
/// literal fill markers `"nan"` / `"unknown"`, but [`Field::is_missing`]
/// treats all of them the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    #[default]
    Absent,
    Text(String),
}

impl Field {
    /// Build a field from a raw cell, trimming it. Empty cells become `Absent`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => Field::Text(s.to_string()),
            _ => Field::Absent,
        }
    }

    /// The text, if present (fill markers included).
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s.as_str()),
            Field::Absent => None,
        }
    }

    /// The text for matching purposes: missing values read as empty.
    pub fn text_or_empty(&self) -> &str {
        if self.is_missing() {
            ""
        } else {
            self.as_text().unwrap_or("")
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    /// True for `Absent` and for the `"nan"` / `"unknown"` fill markers.
    pub fn is_missing(&self) -> bool {
        match self {
            Field::Absent => true,
            Field::Text(s) => MISSING_FILL_MARKERS
                .iter()
                .any(|marker| s.eq_ignore_ascii_case(marker)),
        }
    }

    /// True when the cell holds the "not yet researched" placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Field::Text(s) if s == MISSING_SENTINEL)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::from_raw(Some(value))
    }
}

impl From<Option<&str>> for Field {
    fn from(value: Option<&str>) -> Self {
        Field::from_raw(value)
    }
}
