//! Keyword groups for the position classifier.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CEO_FOUNDER_KEYWORDS, CTO_KEYWORDS, FACULTY_KEYWORDS, SENIOR_LEADERSHIP_KEYWORDS,
};

/// Keyword groups, one per keyword-backed category. An empty list means
/// "use the compiled default group".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    pub ceo_founder_keywords: Vec<String>,
    pub cto_keywords: Vec<String>,
    pub faculty_keywords: Vec<String>,
    pub senior_leadership_keywords: Vec<String>,
}

impl ClassifierConfig {
    pub fn effective_ceo_founder_keywords(&self) -> Vec<String> {
        or_default(&self.ceo_founder_keywords, &CEO_FOUNDER_KEYWORDS)
    }

    pub fn effective_cto_keywords(&self) -> Vec<String> {
        or_default(&self.cto_keywords, &CTO_KEYWORDS)
    }

    pub fn effective_faculty_keywords(&self) -> Vec<String> {
        or_default(&self.faculty_keywords, &FACULTY_KEYWORDS)
    }

    pub fn effective_senior_leadership_keywords(&self) -> Vec<String> {
        or_default(&self.senior_leadership_keywords, &SENIOR_LEADERSHIP_KEYWORDS)
    }
}

pub(crate) fn or_default(configured: &[String], default: &[&str]) -> Vec<String> {
    if configured.is_empty() {
        default.iter().map(|s| s.to_string()).collect()
    } else {
        configured.to_vec()
    }
}
