//! Missing-data detector and the follow-up worklist.

use serde::Serialize;

use roster_core::types::{AlumniRecord, RoleType};

/// True when the primary position is missing or still the research
/// placeholder.
pub fn is_incomplete(record: &AlumniRecord) -> bool {
    record.position_primary.is_missing() || record.position_primary.is_placeholder()
}

/// One incomplete record queued for manual research.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingDataEntry {
    pub name: String,
    pub role_type: RoleType,
    pub cohort_year: Option<i32>,
    pub profile_url: Option<String>,
}

impl MissingDataEntry {
    pub fn from_record(record: &AlumniRecord) -> Self {
        Self {
            name: record.name.clone(),
            role_type: record.role_type,
            cohort_year: record.cohort_year,
            profile_url: if record.profile_url.is_missing() {
                None
            } else {
                record.profile_url.as_text().map(str::to_string)
            },
        }
    }
}

/// Incomplete records in input order.
pub fn build_worklist<'a, I>(records: I) -> Vec<MissingDataEntry>
where
    I: IntoIterator<Item = &'a AlumniRecord>,
{
    records
        .into_iter()
        .filter(|record| is_incomplete(record))
        .map(MissingDataEntry::from_record)
        .collect()
}
