//! Row-level defects found while normalizing. None of these abort a run.

use serde::Serialize;

use super::error_code::{self, RosterErrorCode};

/// Structural defects in an input row. The normalizer substitutes the
/// missing-field sentinel and records one of these instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind")]
pub enum NormalizeError {
    #[error("Row {row}: missing column '{column}'")]
    MissingColumn { row: usize, column: String },

    #[error("Row {row}: name is empty")]
    EmptyName { row: usize },
}

impl NormalizeError {
    /// Zero-based input row the defect was found in.
    pub fn row(&self) -> usize {
        match self {
            Self::MissingColumn { row, .. } | Self::EmptyName { row } => *row,
        }
    }
}

impl RosterErrorCode for NormalizeError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_ROW
    }
}
