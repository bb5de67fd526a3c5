//! Degree-1 least-squares fit of leadership rate against cohort year.

use serde::Serialize;
use statrs::statistics::Statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Increasing,
    StableOrDecreasing,
}

impl TrendDirection {
    fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::StableOrDecreasing
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeadershipTrend {
    /// Percentage points per year.
    pub slope: f64,
    pub intercept: f64,
    pub direction: TrendDirection,
    /// Number of years the fit was computed over.
    pub years: usize,
}

impl LeadershipTrend {
    /// Fit `points` of `(year, rate)`. `None` with fewer than two distinct
    /// years, where the slope is undefined.
    pub fn fit(points: &[(i32, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let xs: Vec<f64> = points.iter().map(|&(year, _)| f64::from(year)).collect();
        let ys: Vec<f64> = points.iter().map(|&(_, rate)| rate).collect();

        let x_var = xs.iter().variance();
        if !x_var.is_finite() || x_var == 0.0 {
            return None;
        }
        let slope = xs.iter().covariance(ys.iter()) / x_var;
        let intercept = ys.iter().mean() - slope * xs.iter().mean();
        if !slope.is_finite() || !intercept.is_finite() {
            return None;
        }

        Some(Self {
            slope,
            intercept,
            direction: TrendDirection::from_slope(slope),
            years: points.len(),
        })
    }

    /// Fitted rate at `year`.
    pub fn predict(&self, year: i32) -> f64 {
        self.intercept + self.slope * f64::from(year)
    }
}
