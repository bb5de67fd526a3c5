//! Comparison of observed category rates against configured baselines.

use serde::Serialize;

use roster_core::config::BenchmarkConfig;
use roster_core::types::CategoryLabel;

use super::population::CategoryRate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkComparison {
    pub label: CategoryLabel,
    pub observed_rate: f64,
    pub baseline_rate: f64,
    /// `observed / baseline`; absent when the baseline is zero.
    pub multiplier: Option<f64>,
}

/// One comparison per keyword-backed label that has a rate.
pub fn compare(rates: &[CategoryRate], config: &BenchmarkConfig) -> Vec<BenchmarkComparison> {
    rates
        .iter()
        .filter_map(|rate| {
            let baseline = config.effective_baseline(rate.label)?;
            let multiplier = (baseline > 0.0).then(|| rate.percentage / baseline);
            Some(BenchmarkComparison {
                label: rate.label,
                observed_rate: rate.percentage,
                baseline_rate: baseline,
                multiplier,
            })
        })
        .collect()
}
