//! Seven-keyword leadership test used by the per-year leadership rate.
//!
//! Deliberately separate from the four-group classifier: it has its own
//! table, and a record is a "leader" if either position field contains any
//! of its keywords.

use roster_core::config::LeadershipConfig;
use roster_core::errors::ConfigError;
use roster_core::types::Field;

use super::KeywordMatcher;

#[derive(Debug, Clone)]
pub struct LeadershipMatcher {
    matcher: KeywordMatcher,
}

impl LeadershipMatcher {
    pub fn new(config: &LeadershipConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            matcher: KeywordMatcher::new("leadership", &[config.effective_keywords()])?,
        })
    }

    /// Each position field is tested on its own.
    pub fn has_leadership(&self, primary: &Field, secondary: &Field) -> bool {
        self.matcher.is_match(primary.text_or_empty())
            || self.matcher.is_match(secondary.text_or_empty())
    }
}
