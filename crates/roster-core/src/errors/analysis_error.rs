//! Analysis errors and non-fatal issue collection.

use super::error_code::{self, RosterErrorCode};
use super::{ConfigError, NormalizeError};

/// Errors that stop an analysis run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Population-wide rates are undefined without records.
    #[error("Insufficient data for {stage}: no records to aggregate")]
    InsufficientData { stage: &'static str },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RosterErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result of a stage that accumulates non-fatal issues.
/// The data is always usable; issues are reported alongside it.
#[derive(Debug, Default)]
pub struct AnalysisOutcome<T: Default = ()> {
    /// The stage output.
    pub data: T,
    /// Non-fatal issues collected during the stage, in input order.
    pub issues: Vec<NormalizeError>,
}

impl<T: Default> AnalysisOutcome<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            issues: Vec::new(),
        }
    }

    pub fn add_issue(&mut self, issue: NormalizeError) {
        self.issues.push(issue);
    }

    /// Returns true if there are no non-fatal issues.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}
