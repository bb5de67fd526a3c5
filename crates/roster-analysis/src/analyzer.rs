//! End-to-end run: normalize, classify, detect, extract, aggregate.

use serde::Serialize;

use roster_core::config::RosterConfig;
use roster_core::errors::{AnalysisError, NormalizeError};
use roster_core::tracing::fields;
use roster_core::types::{AlumniRecord, RawRow};

use crate::affiliation::{AffiliationExtractor, AffiliationTally, Credits};
use crate::classified::ClassifiedRecord;
use crate::classifier::{LeadershipMatcher, PositionClassifier};
use crate::metrics::{MetricsAggregator, RosterMetrics};
use crate::missing::{self, MissingDataEntry};
use crate::normalizer::Normalizer;

/// Everything one run produces. Pure data, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Classified records in input order.
    pub records: Vec<ClassifiedRecord>,
    /// Incomplete records in input order.
    pub worklist: Vec<MissingDataEntry>,
    pub metrics: RosterMetrics,
    /// Full tally in reference-list order; the ranked view is in `metrics`.
    pub affiliations: AffiliationTally,
    /// Non-fatal row defects found while normalizing.
    pub issues: Vec<NormalizeError>,
}

impl AnalysisReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Wires the stages together. Build once, run on any number of tables.
#[derive(Debug, Clone)]
pub struct RosterAnalyzer {
    normalizer: Normalizer,
    classifier: PositionClassifier,
    leadership: LeadershipMatcher,
    extractor: AffiliationExtractor,
    aggregator: MetricsAggregator,
}

impl RosterAnalyzer {
    pub fn new(config: &RosterConfig) -> Result<Self, AnalysisError> {
        RosterConfig::validate(config)?;
        Ok(Self {
            normalizer: Normalizer::new(&config.columns),
            classifier: PositionClassifier::new(&config.classifier)?,
            leadership: LeadershipMatcher::new(&config.leadership)?,
            extractor: AffiliationExtractor::new(&config.affiliations),
            aggregator: MetricsAggregator::new(config),
        })
    }

    pub fn with_defaults() -> Result<Self, AnalysisError> {
        Self::new(&RosterConfig::default())
    }

    /// Analyze raw rows. Fails only when no record survives normalization.
    pub fn analyze(&self, rows: &[RawRow]) -> Result<AnalysisReport, AnalysisError> {
        let outcome = self.normalizer.normalize(rows);
        if !outcome.is_clean() {
            tracing::warn!(
                { fields::ROW_ISSUES } = outcome.issue_count(),
                "rows with structural defects were kept with placeholders"
            );
        }
        let mut report = self.analyze_records(outcome.data)?;
        report.issues = outcome.issues;
        Ok(report)
    }

    /// Analyze records that are already normalized.
    pub fn analyze_records(
        &self,
        records: Vec<AlumniRecord>,
    ) -> Result<AnalysisReport, AnalysisError> {
        if records.is_empty() {
            return Err(AnalysisError::InsufficientData {
                stage: "population rates",
            });
        }

        let worklist = missing::build_worklist(&records);

        let credits: Vec<Credits> = records.iter().map(|r| self.extractor.credits(r)).collect();
        let affiliations = self.extractor.tally_credits(&credits);

        let classified: Vec<ClassifiedRecord> = records
            .into_iter()
            .zip(&credits)
            .map(|(record, credits)| self.classify(record, credits))
            .collect();

        let metrics = self.aggregator.aggregate(&classified, &affiliations)?;

        tracing::info!(
            records = classified.len(),
            { fields::INCOMPLETE_RECORDS } = worklist.len(),
            { fields::AFFILIATION_CREDITS } = affiliations.total_credits(),
            "roster analyzed"
        );

        Ok(AnalysisReport {
            records: classified,
            worklist,
            metrics,
            affiliations,
            issues: Vec::new(),
        })
    }

    fn classify(&self, record: AlumniRecord, credits: &Credits) -> ClassifiedRecord {
        let labels = self
            .classifier
            .classify(&record.position_primary, &record.position_secondary);
        let has_leadership = self
            .leadership
            .has_leadership(&record.position_primary, &record.position_secondary);
        ClassifiedRecord {
            incomplete: missing::is_incomplete(&record),
            affiliations: self.extractor.names_for(credits),
            labels,
            has_leadership,
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_reports_insufficient_data() {
        let analyzer = RosterAnalyzer::with_defaults().unwrap();
        assert!(matches!(
            analyzer.analyze(&[]),
            Err(AnalysisError::InsufficientData { .. })
        ));
        assert!(matches!(
            analyzer.analyze(&[RawRow::new()]),
            Err(AnalysisError::InsufficientData { .. })
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = RosterConfig::default();
        config.affiliations.top_affiliations = Some(0);
        assert!(matches!(
            RosterAnalyzer::new(&config),
            Err(AnalysisError::Config(_))
        ));
    }
}
