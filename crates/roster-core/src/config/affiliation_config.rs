//! Reference lists for the affiliation extractor.

use serde::{Deserialize, Serialize};

use super::classifier_config::or_default;
use crate::constants::{DEFAULT_TOP_AFFILIATIONS, NOTABLE_COMPANIES, NOTABLE_UNIVERSITIES};

/// Notable organizations. Companies are scanned before universities.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AffiliationConfig {
    pub companies: Vec<String>,
    pub universities: Vec<String>,
    /// Length of the ranked affiliation list. Default: 15.
    pub top_affiliations: Option<usize>,
}

impl AffiliationConfig {
    pub fn effective_companies(&self) -> Vec<String> {
        or_default(&self.companies, &NOTABLE_COMPANIES)
    }

    pub fn effective_universities(&self) -> Vec<String> {
        or_default(&self.universities, &NOTABLE_UNIVERSITIES)
    }

    /// Companies followed by universities, in scan priority order.
    pub fn effective_reference_list(&self) -> Vec<String> {
        let mut list = self.effective_companies();
        list.extend(self.effective_universities());
        list
    }

    pub fn effective_top_affiliations(&self) -> usize {
        self.top_affiliations.unwrap_or(DEFAULT_TOP_AFFILIATIONS)
    }
}
