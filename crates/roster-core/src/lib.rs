//! # roster-core
//!
//! Foundation crate for the roster outcome analysis engine.
//! Defines the record model, errors, config, tracing setup, and constants.
//! The analysis crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::RosterConfig;
pub use errors::{AnalysisError, AnalysisOutcome, ConfigError, NormalizeError, RosterErrorCode};
pub use types::{AlumniRecord, CategoryLabel, CategorySet, Field, RawRow, RoleType, Sector};
