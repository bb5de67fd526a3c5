//! Keyword table for the per-year leadership rate.

use serde::{Deserialize, Serialize};

use super::classifier_config::or_default;
use crate::constants::LEADERSHIP_RATE_KEYWORDS;

/// Configuration for the leadership-rate helper. Independent of
/// [`super::ClassifierConfig`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LeadershipConfig {
    pub keywords: Vec<String>,
}

impl LeadershipConfig {
    pub fn effective_keywords(&self) -> Vec<String> {
        or_default(&self.keywords, &LEADERSHIP_RATE_KEYWORDS)
    }
}
