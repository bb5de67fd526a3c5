//! Baseline rates the population is compared against.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASELINE_CEO_FOUNDER, DEFAULT_BASELINE_CTO, DEFAULT_BASELINE_FACULTY,
    DEFAULT_BASELINE_SENIOR_LEADERSHIP,
};
use crate::types::CategoryLabel;

/// Baseline percentages per category (e.g. national averages).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub faculty: Option<f64>,
    pub ceo_founder: Option<f64>,
    pub cto: Option<f64>,
    pub senior_leadership: Option<f64>,
}

impl BenchmarkConfig {
    /// Baseline for a label. `Other` has no baseline.
    pub fn effective_baseline(&self, label: CategoryLabel) -> Option<f64> {
        match label {
            CategoryLabel::Faculty => Some(self.faculty.unwrap_or(DEFAULT_BASELINE_FACULTY)),
            CategoryLabel::CeoFounder => {
                Some(self.ceo_founder.unwrap_or(DEFAULT_BASELINE_CEO_FOUNDER))
            }
            CategoryLabel::Cto => Some(self.cto.unwrap_or(DEFAULT_BASELINE_CTO)),
            CategoryLabel::SeniorLeadership => Some(
                self.senior_leadership
                    .unwrap_or(DEFAULT_BASELINE_SENIOR_LEADERSHIP),
            ),
            CategoryLabel::Other => None,
        }
    }
}
