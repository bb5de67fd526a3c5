//! # roster-analysis
//!
//! Classification and aggregation engine over alumni rosters.
//!
//! Raw rows flow one way: [`normalizer`] → {[`classifier`], [`missing`],
//! [`affiliation`]} → [`metrics`]. [`RosterAnalyzer`] runs the whole chain
//! and returns an [`AnalysisReport`].

pub mod affiliation;
pub mod analyzer;
pub mod classified;
pub mod classifier;
pub mod metrics;
pub mod missing;
pub mod normalizer;

pub use affiliation::{AffiliationCount, AffiliationExtractor, AffiliationTally};
pub use analyzer::{AnalysisReport, RosterAnalyzer};
pub use classified::ClassifiedRecord;
pub use classifier::{LeadershipMatcher, PositionClassifier};
pub use metrics::{MetricsAggregator, RosterMetrics};
pub use missing::MissingDataEntry;
pub use normalizer::Normalizer;
