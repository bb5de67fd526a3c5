//! Affiliation extractor: credits notable organizations named in a record's
//! organization fields.
//!
//! Each field is scanned against the reference list (companies, then
//! universities) and the first entry found as a case-insensitive substring is
//! credited; scanning that field stops there. A record is counted at most
//! once per organization, so it contributes at most two credits.

use serde::Serialize;
use smallvec::SmallVec;

use roster_core::config::AffiliationConfig;
use roster_core::tracing::fields;
use roster_core::types::{AlumniRecord, Field};

/// Reference-list indices credited to one record (at most two).
pub type Credits = SmallVec<[usize; 2]>;

/// First-match-wins scanner over the fixed reference list.
#[derive(Debug, Clone)]
pub struct AffiliationExtractor {
    names: Vec<String>,
    lowered: Vec<String>,
}

impl AffiliationExtractor {
    pub fn new(config: &AffiliationConfig) -> Self {
        Self::from_reference_list(config.effective_reference_list())
    }

    /// Build from an explicit list, already in priority order.
    pub fn from_reference_list(names: Vec<String>) -> Self {
        let lowered = names.iter().map(|n| n.to_lowercase()).collect();
        Self { names, lowered }
    }

    /// Index of the first reference entry contained in `value`.
    pub fn match_field(&self, value: &Field) -> Option<usize> {
        if value.is_missing() {
            return None;
        }
        let haystack = value.as_text()?.to_lowercase();
        self.lowered
            .iter()
            .position(|needle| haystack.contains(needle.as_str()))
    }

    /// Reference indices credited to `record`, primary field first.
    pub fn credits(&self, record: &AlumniRecord) -> Credits {
        let mut credits = Credits::new();
        for field in [&record.org_primary, &record.org_secondary] {
            if let Some(idx) = self.match_field(field) {
                if !credits.contains(&idx) {
                    credits.push(idx);
                }
            }
        }
        credits
    }

    /// Reference names credited to `record`.
    pub fn credited_names(&self, record: &AlumniRecord) -> SmallVec<[String; 2]> {
        self.names_for(&self.credits(record))
    }

    pub fn names_for(&self, credits: &Credits) -> SmallVec<[String; 2]> {
        credits
            .iter()
            .filter_map(|&idx| self.names.get(idx).cloned())
            .collect()
    }

    /// Tally credits over all records.
    pub fn tally<'a, I>(&self, records: I) -> AffiliationTally
    where
        I: IntoIterator<Item = &'a AlumniRecord>,
    {
        let credits: Vec<Credits> = records.into_iter().map(|r| self.credits(r)).collect();
        self.tally_credits(&credits)
    }

    /// Tally per-record credits already computed with [`Self::credits`].
    pub fn tally_credits(&self, credits: &[Credits]) -> AffiliationTally {
        let mut counts = vec![0usize; self.names.len()];
        for idx in credits.iter().flatten() {
            if let Some(count) = counts.get_mut(*idx) {
                *count += 1;
            }
        }
        let tally = AffiliationTally::from_counts(&self.names, &counts);
        tracing::debug!(
            { fields::AFFILIATION_CREDITS } = tally.total_credits(),
            distinct = tally.distinct(),
            "affiliations tallied"
        );
        tally
    }
}

/// Count of records crediting one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffiliationCount {
    pub name: String,
    pub count: usize,
    /// Position in the reference list; breaks ranking ties.
    pub reference_rank: usize,
}

/// Organizations with at least one credit, in reference-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AffiliationTally {
    entries: Vec<AffiliationCount>,
}

impl AffiliationTally {
    fn from_counts(names: &[String], counts: &[usize]) -> Self {
        let entries = names
            .iter()
            .zip(counts)
            .enumerate()
            .filter(|(_, (_, count))| **count > 0)
            .map(|(rank, (name, count))| AffiliationCount {
                name: name.clone(),
                count: *count,
                reference_rank: rank,
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map_or(0, |e| e.count)
    }

    /// Number of distinct notable organizations credited.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn total_credits(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn entries(&self) -> &[AffiliationCount] {
        &self.entries
    }

    /// Top `limit` organizations by count, ties in reference-list order.
    pub fn ranked(&self, limit: usize) -> Vec<AffiliationCount> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.reference_rank.cmp(&b.reference_rank))
        });
        ranked.truncate(limit);
        ranked
    }
}
