//! Position classifier. Maps position text to career-outcome categories.
//!
//! Four independent keyword groups (CEO/Founder, CTO, Faculty, Senior
//! Leadership) are checked against the combined position text. Every group
//! is tested; a record can collect several labels. No match yields `{Other}`.

pub mod keyword_matcher;
pub mod leadership;

use roster_core::config::ClassifierConfig;
use roster_core::errors::ConfigError;
use roster_core::types::{CategoryLabel, CategorySet, Field};

pub use keyword_matcher::KeywordMatcher;
pub use leadership::LeadershipMatcher;

/// Keyword-group order inside the matcher. Index `i` credits `GROUP_LABELS[i]`.
const GROUP_LABELS: [CategoryLabel; 4] = CategoryLabel::KEYWORD_BACKED;

/// Multi-label position classifier.
#[derive(Debug, Clone)]
pub struct PositionClassifier {
    matcher: KeywordMatcher,
}

impl PositionClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self, ConfigError> {
        let groups = [
            config.effective_ceo_founder_keywords(),
            config.effective_cto_keywords(),
            config.effective_faculty_keywords(),
            config.effective_senior_leadership_keywords(),
        ];
        Ok(Self {
            matcher: KeywordMatcher::new("classifier", &groups)?,
        })
    }

    /// Classify a record's primary and secondary position.
    pub fn classify(&self, primary: &Field, secondary: &Field) -> CategorySet {
        let combined = combined_text(primary, secondary);
        let hits = self.matcher.matched_groups(&combined);

        let labels: CategorySet = GROUP_LABELS
            .iter()
            .zip(hits)
            .filter_map(|(label, hit)| hit.then_some(*label))
            .collect();

        if labels.is_empty() {
            CategorySet::other()
        } else {
            labels
        }
    }
}

/// Both position fields joined by a space, missing fields read as empty.
pub fn combined_text(primary: &Field, secondary: &Field) -> String {
    format!("{} {}", primary.text_or_empty(), secondary.text_or_empty())
}
