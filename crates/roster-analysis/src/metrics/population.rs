//! Population-wide counts and rates.
//!
//! Every function here returns an empty result for an empty population; the
//! aggregator refuses empty input before calling them.

use serde::Serialize;

use roster_core::types::collections::{BTreeMap, BTreeSet};
use roster_core::types::{CategoryLabel, RoleType, Sector};

use super::{percentage, round_one_decimal};
use crate::classified::ClassifiedRecord;

/// Records carrying one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRate {
    pub label: CategoryLabel,
    pub count: usize,
    /// Share of the whole population, one decimal place.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorShare {
    pub sector: Sector,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleShare {
    pub role_type: RoleType,
    pub count: usize,
    pub percentage: f64,
}

/// Sector split within one role type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorByRole {
    pub role_type: RoleType,
    pub total: usize,
    /// One entry per sector seen anywhere in the population, zeros included.
    pub shares: Vec<SectorShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataCompleteness {
    pub total: usize,
    pub incomplete: usize,
    /// Share of records with a usable primary position, one decimal place.
    pub complete_percentage: f64,
}

/// Per-label counts and rates, one entry per label including `Other`.
///
/// Labels overlap, so the percentages do not sum to 100.
pub fn category_rates(records: &[ClassifiedRecord]) -> Vec<CategoryRate> {
    let total = records.len();
    if total == 0 {
        return Vec::new();
    }
    CategoryLabel::ALL
        .iter()
        .map(|&label| {
            let count = records.iter().filter(|r| r.labels.contains(label)).count();
            CategoryRate {
                label,
                count,
                percentage: round_one_decimal(percentage(count, total)),
            }
        })
        .collect()
}

/// Count and percentage for each sector present, in enum order.
pub fn sector_distribution(records: &[ClassifiedRecord]) -> Vec<SectorShare> {
    let total = records.len();
    let mut counts: BTreeMap<Sector, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.record.sector).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(sector, count)| SectorShare {
            sector,
            count,
            percentage: round_one_decimal(percentage(count, total)),
        })
        .collect()
}

/// Count and percentage for each role type present, in enum order.
pub fn role_distribution(records: &[ClassifiedRecord]) -> Vec<RoleShare> {
    let total = records.len();
    let mut counts: BTreeMap<RoleType, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.record.role_type).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(role_type, count)| RoleShare {
            role_type,
            count,
            percentage: round_one_decimal(percentage(count, total)),
        })
        .collect()
}

/// Role type × sector cross-tabulation with row percentages.
pub fn sector_by_role(records: &[ClassifiedRecord]) -> Vec<SectorByRole> {
    let mut table: BTreeMap<RoleType, BTreeMap<Sector, usize>> = BTreeMap::new();
    let mut sectors_seen: BTreeSet<Sector> = BTreeSet::new();
    for r in records {
        *table
            .entry(r.record.role_type)
            .or_default()
            .entry(r.record.sector)
            .or_default() += 1;
        sectors_seen.insert(r.record.sector);
    }

    table
        .into_iter()
        .map(|(role_type, row)| {
            let total: usize = row.values().sum();
            let shares = sectors_seen
                .iter()
                .map(|&sector| {
                    let count = row.get(&sector).copied().unwrap_or(0);
                    SectorShare {
                        sector,
                        count,
                        percentage: round_one_decimal(percentage(count, total)),
                    }
                })
                .collect();
            SectorByRole {
                role_type,
                total,
                shares,
            }
        })
        .collect()
}

pub fn completeness(records: &[ClassifiedRecord]) -> DataCompleteness {
    let total = records.len();
    let incomplete = records.iter().filter(|r| r.incomplete).count();
    DataCompleteness {
        total,
        incomplete,
        complete_percentage: round_one_decimal(percentage(total - incomplete, total)),
    }
}
