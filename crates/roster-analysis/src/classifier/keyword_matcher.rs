//! Grouped substring matcher backed by a single Aho-Corasick automaton.

use aho_corasick::AhoCorasick;
use roster_core::errors::ConfigError;

/// Matches a text against several keyword groups at once and reports which
/// groups had at least one keyword occur as a substring.
///
/// Keywords and haystacks are upper-cased before matching, so containment is
/// case-insensitive. Every occurrence is considered (overlapping search), so
/// a keyword nested inside another ("CHIEF" in "CHIEF TECHNOLOGY") still
/// credits its own group.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    automaton: AhoCorasick,
    /// Group index for each pattern id.
    pattern_groups: Vec<usize>,
    group_count: usize,
}

impl KeywordMatcher {
    /// Build from keyword groups. `table` names the config table for errors.
    pub fn new<S: AsRef<str>>(table: &str, groups: &[Vec<S>]) -> Result<Self, ConfigError> {
        let mut patterns = Vec::new();
        let mut pattern_groups = Vec::new();
        for (group_idx, keywords) in groups.iter().enumerate() {
            for keyword in keywords {
                patterns.push(keyword.as_ref().to_uppercase());
                pattern_groups.push(group_idx);
            }
        }

        let automaton = AhoCorasick::new(&patterns).map_err(|e| ConfigError::ValidationFailed {
            field: table.to_string(),
            message: format!("keyword table could not be compiled: {e}"),
        })?;

        Ok(Self {
            automaton,
            pattern_groups,
            group_count: groups.len(),
        })
    }

    /// For each group, whether any of its keywords occurs in `text`.
    pub fn matched_groups(&self, text: &str) -> Vec<bool> {
        let mut hits = vec![false; self.group_count];
        if text.is_empty() {
            return hits;
        }
        let haystack = text.to_uppercase();
        for m in self.automaton.find_overlapping_iter(&haystack) {
            hits[self.pattern_groups[m.pattern().as_usize()]] = true;
        }
        hits
    }

    /// Whether any keyword from any group occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        !text.is_empty() && self.automaton.is_match(&text.to_uppercase())
    }
}
