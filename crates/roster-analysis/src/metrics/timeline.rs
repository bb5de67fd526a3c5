//! Year-keyed aggregations.
//!
//! Role-type counts cover every dated record. Everything else here is
//! restricted to the timeline: dated records with `year >= cutoff`.
//! Per-year rates are kept unrounded; the trend is fitted on them.

use serde::Serialize;

use roster_core::constants::DECADE_WIDTH;
use roster_core::types::collections::BTreeMap;
use roster_core::types::{RoleType, Sector};

use super::percentage;
use super::trend::LeadershipTrend;
use crate::classified::ClassifiedRecord;

/// Records per role type within one cohort year. Dense: every role type has a
/// slot, zero when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct YearTypeCounts {
    pub graduate_student: usize,
    pub phd_granted: usize,
    pub postdoctoral_scholar: usize,
    pub other: usize,
}

impl YearTypeCounts {
    pub fn get(&self, role_type: RoleType) -> usize {
        match role_type {
            RoleType::GraduateStudent => self.graduate_student,
            RoleType::PhDGranted => self.phd_granted,
            RoleType::PostdoctoralScholar => self.postdoctoral_scholar,
            RoleType::Other => self.other,
        }
    }

    fn slot_mut(&mut self, role_type: RoleType) -> &mut usize {
        match role_type {
            RoleType::GraduateStudent => &mut self.graduate_student,
            RoleType::PhDGranted => &mut self.phd_granted,
            RoleType::PostdoctoralScholar => &mut self.postdoctoral_scholar,
            RoleType::Other => &mut self.other,
        }
    }

    pub fn total(&self) -> usize {
        RoleType::ALL.iter().map(|&r| self.get(r)).sum()
    }
}

/// Industry and academia share of one year's records.
///
/// `Both` and `Unknown` count toward `total` only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSectorShare {
    pub year: i32,
    pub total: usize,
    pub industry_percentage: f64,
    pub academia_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearLeadership {
    pub year: i32,
    pub total: usize,
    pub leaders: usize,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeSummary {
    /// First year of the decade, e.g. 2010.
    pub decade: i32,
    pub total: usize,
    pub leaders: usize,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineInsights {
    /// Year with the most records; earliest wins ties.
    pub peak_cohort_year: i32,
    pub peak_cohort_size: usize,
    pub span_years: i32,
    /// Leaders over all timeline records.
    pub average_leadership_rate: f64,
    /// Year with the highest leadership rate; earliest wins ties.
    pub peak_leadership_year: i32,
    pub peak_leadership_rate: f64,
    pub mean_industry_percentage: f64,
    pub mean_academia_percentage: f64,
}

/// Everything keyed by cohort year from the cutoff onward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub cutoff_year: i32,
    pub record_count: usize,
    pub sector_by_year: Vec<YearSectorShare>,
    pub leadership_by_year: Vec<YearLeadership>,
    /// Absent with fewer than two timeline years.
    pub trend: Option<LeadershipTrend>,
    pub decades: Vec<DecadeSummary>,
    /// Absent when no record falls in the timeline.
    pub insights: Option<TimelineInsights>,
}

/// Dense per-year role-type counts over every dated record.
pub fn per_year_type_counts(records: &[ClassifiedRecord]) -> BTreeMap<i32, YearTypeCounts> {
    let mut counts: BTreeMap<i32, YearTypeCounts> = BTreeMap::new();
    for r in records {
        if let Some(year) = r.record.cohort_year {
            *counts.entry(year).or_default().slot_mut(r.record.role_type) += 1;
        }
    }
    counts
}

#[derive(Default)]
struct YearBucket {
    total: usize,
    industry: usize,
    academia: usize,
    leaders: usize,
}

pub fn build_timeline(records: &[ClassifiedRecord], cutoff_year: i32) -> Timeline {
    let mut buckets: BTreeMap<i32, YearBucket> = BTreeMap::new();
    for r in records {
        let Some(year) = r.record.cohort_year else {
            continue;
        };
        if year < cutoff_year {
            continue;
        }
        let bucket = buckets.entry(year).or_default();
        bucket.total += 1;
        match r.record.sector {
            Sector::Industry => bucket.industry += 1,
            Sector::Academia => bucket.academia += 1,
            Sector::Both | Sector::Unknown => {}
        }
        if r.has_leadership {
            bucket.leaders += 1;
        }
    }

    let sector_by_year: Vec<YearSectorShare> = buckets
        .iter()
        .map(|(&year, b)| YearSectorShare {
            year,
            total: b.total,
            industry_percentage: percentage(b.industry, b.total),
            academia_percentage: percentage(b.academia, b.total),
        })
        .collect();

    let leadership_by_year: Vec<YearLeadership> = buckets
        .iter()
        .map(|(&year, b)| YearLeadership {
            year,
            total: b.total,
            leaders: b.leaders,
            rate: percentage(b.leaders, b.total),
        })
        .collect();

    let points: Vec<(i32, f64)> = leadership_by_year.iter().map(|y| (y.year, y.rate)).collect();
    let trend = LeadershipTrend::fit(&points);

    let mut decade_totals: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    for (&year, b) in &buckets {
        let entry = decade_totals
            .entry(year.div_euclid(DECADE_WIDTH) * DECADE_WIDTH)
            .or_default();
        entry.0 += b.total;
        entry.1 += b.leaders;
    }
    let decades = decade_totals
        .into_iter()
        .map(|(decade, (total, leaders))| DecadeSummary {
            decade,
            total,
            leaders,
            rate: percentage(leaders, total),
        })
        .collect();

    let record_count = buckets.values().map(|b| b.total).sum();
    let insights = insights(&sector_by_year, &leadership_by_year, record_count);

    Timeline {
        cutoff_year,
        record_count,
        sector_by_year,
        leadership_by_year,
        trend,
        decades,
        insights,
    }
}

fn insights(
    sectors: &[YearSectorShare],
    leadership: &[YearLeadership],
    record_count: usize,
) -> Option<TimelineInsights> {
    let first = leadership.first()?;
    let last = leadership.last()?;

    // Strict comparisons keep the earliest year on ties; input is year-sorted.
    let mut peak_cohort = first;
    let mut peak_leadership = first;
    for y in leadership {
        if y.total > peak_cohort.total {
            peak_cohort = y;
        }
        if y.rate > peak_leadership.rate {
            peak_leadership = y;
        }
    }

    let leaders: usize = leadership.iter().map(|y| y.leaders).sum();
    let years = sectors.len() as f64;
    let mean_industry = sectors.iter().map(|s| s.industry_percentage).sum::<f64>() / years;
    let mean_academia = sectors.iter().map(|s| s.academia_percentage).sum::<f64>() / years;

    Some(TimelineInsights {
        peak_cohort_year: peak_cohort.year,
        peak_cohort_size: peak_cohort.total,
        span_years: last.year - first.year,
        average_leadership_rate: percentage(leaders, record_count),
        peak_leadership_year: peak_leadership.year,
        peak_leadership_rate: peak_leadership.rate,
        mean_industry_percentage: mean_industry,
        mean_academia_percentage: mean_academia,
    })
}
