//! Timeline aggregation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIMELINE_CUTOFF_YEAR;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimelineConfig {
    /// Earliest cohort year included in the timeline. Default: 2008.
    pub cutoff_year: Option<i32>,
}

impl TimelineConfig {
    pub fn effective_cutoff_year(&self) -> i32 {
        self.cutoff_year.unwrap_or(DEFAULT_TIMELINE_CUTOFF_YEAR)
    }
}
