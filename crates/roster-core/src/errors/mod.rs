//! Error handling for roster.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod normalize_error;

pub use analysis_error::{AnalysisError, AnalysisOutcome};
pub use config_error::ConfigError;
pub use error_code::RosterErrorCode;
pub use normalize_error::NormalizeError;
