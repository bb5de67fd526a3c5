//! Structured field names used in roster log events.
//!
//! Consistent names keep log queries stable across components.

/// Normalizer: records produced.
pub const RECORDS_NORMALIZED: &str = "records_normalized";

/// Normalizer: fully blank rows dropped.
pub const ROWS_DROPPED: &str = "rows_dropped";

/// Normalizer: non-fatal row issues.
pub const ROW_ISSUES: &str = "row_issues";

/// Missing-data detector: incomplete records.
pub const INCOMPLETE_RECORDS: &str = "incomplete_records";

/// Affiliation extractor: total credits awarded.
pub const AFFILIATION_CREDITS: &str = "affiliation_credits";

/// Aggregator: records without a usable cohort year.
pub const UNDATED_RECORDS: &str = "undated_records";

/// Aggregator: distinct cohort years in the timeline.
pub const TIMELINE_YEARS: &str = "timeline_years";
