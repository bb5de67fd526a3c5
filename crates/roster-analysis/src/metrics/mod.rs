//! Metrics aggregator: population rates, the timeline, and benchmarks.
//!
//! All grouping is by value (sorted maps), so every count and rate is
//! independent of input order.

pub mod benchmark;
pub mod population;
pub mod timeline;
pub mod trend;

use serde::Serialize;

use roster_core::config::{BenchmarkConfig, RosterConfig};
use roster_core::errors::AnalysisError;
use roster_core::tracing::fields;
use roster_core::types::collections::BTreeMap;
use roster_core::types::CategoryLabel;

use crate::affiliation::{AffiliationCount, AffiliationTally};
use crate::classified::ClassifiedRecord;

pub use benchmark::BenchmarkComparison;
pub use population::{CategoryRate, DataCompleteness, RoleShare, SectorByRole, SectorShare};
pub use timeline::{
    DecadeSummary, Timeline, TimelineInsights, YearLeadership, YearSectorShare, YearTypeCounts,
};
pub use trend::{LeadershipTrend, TrendDirection};

/// `count / total` as a percentage; zero for an empty denominator.
pub(crate) fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}

/// One decimal place, ties to even (6.25 reads as 6.2).
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Everything the aggregator derives from a classified population.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterMetrics {
    pub total_records: usize,
    /// One entry per label, `Other` included. Not a partition.
    pub category_rates: Vec<CategoryRate>,
    pub sector_distribution: Vec<SectorShare>,
    pub role_distribution: Vec<RoleShare>,
    pub sector_by_role: Vec<SectorByRole>,
    pub completeness: DataCompleteness,
    /// Records without a usable cohort year; excluded from year-keyed output.
    pub undated_records: usize,
    pub year_type_counts: BTreeMap<i32, YearTypeCounts>,
    pub timeline: Timeline,
    pub benchmark: Vec<BenchmarkComparison>,
    pub top_affiliations: Vec<AffiliationCount>,
    pub distinct_affiliations: usize,
}

impl RosterMetrics {
    pub fn category_rate(&self, label: CategoryLabel) -> Option<&CategoryRate> {
        self.category_rates.iter().find(|r| r.label == label)
    }
}

/// Consumes classified records and produces [`RosterMetrics`].
#[derive(Debug, Clone)]
pub struct MetricsAggregator {
    cutoff_year: i32,
    top_affiliations: usize,
    benchmark: BenchmarkConfig,
}

impl MetricsAggregator {
    pub fn new(config: &RosterConfig) -> Self {
        Self {
            cutoff_year: config.timeline.effective_cutoff_year(),
            top_affiliations: config.affiliations.effective_top_affiliations(),
            benchmark: config.benchmark.clone(),
        }
    }

    pub fn cutoff_year(&self) -> i32 {
        self.cutoff_year
    }

    /// Aggregate a non-empty population.
    ///
    /// Returns [`AnalysisError::InsufficientData`] for an empty population,
    /// where every population-wide rate is undefined.
    pub fn aggregate(
        &self,
        records: &[ClassifiedRecord],
        affiliations: &AffiliationTally,
    ) -> Result<RosterMetrics, AnalysisError> {
        if records.is_empty() {
            return Err(AnalysisError::InsufficientData {
                stage: "population rates",
            });
        }

        let category_rates = population::category_rates(records);
        let benchmark = benchmark::compare(&category_rates, &self.benchmark);
        let undated_records = records.iter().filter(|r| r.record.cohort_year.is_none()).count();
        let timeline = timeline::build_timeline(records, self.cutoff_year);

        tracing::info!(
            total = records.len(),
            { fields::UNDATED_RECORDS } = undated_records,
            { fields::TIMELINE_YEARS } = timeline.leadership_by_year.len(),
            trend = timeline.trend.is_some(),
            "metrics aggregated"
        );

        Ok(RosterMetrics {
            total_records: records.len(),
            category_rates,
            sector_distribution: population::sector_distribution(records),
            role_distribution: population::role_distribution(records),
            sector_by_role: population::sector_by_role(records),
            completeness: population::completeness(records),
            undated_records,
            year_type_counts: timeline::per_year_type_counts(records),
            timeline,
            benchmark,
            top_affiliations: affiliations.ranked(self.top_affiliations),
            distinct_affiliations: affiliations.distinct(),
        })
    }
}
