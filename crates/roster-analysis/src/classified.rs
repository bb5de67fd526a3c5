//! A normalized record together with everything derived from it.

use serde::Serialize;
use smallvec::SmallVec;

use roster_core::types::{AlumniRecord, CategorySet};

/// Output of the per-record stages, consumed by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    pub record: AlumniRecord,
    /// Never empty; `{Other}` when no keyword group matched.
    pub labels: CategorySet,
    /// Primary position missing or still the research placeholder.
    pub incomplete: bool,
    /// Result of the seven-keyword leadership test.
    pub has_leadership: bool,
    /// Notable organizations credited to this record (at most two).
    pub affiliations: SmallVec<[String; 2]>,
}
