//! Canonical alumni record produced by the normalizer.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::Field;
use crate::constants::{
    ROLE_GRADUATE_STUDENT, ROLE_PHD_GRANTED, ROLE_POSTDOCTORAL_SCHOLAR, SECTOR_TABLE,
};

/// Program role of an alumnus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoleType {
    GraduateStudent,
    PhDGranted,
    PostdoctoralScholar,
    Other,
}

impl RoleType {
    pub const ALL: [RoleType; 4] = [
        RoleType::GraduateStudent,
        RoleType::PhDGranted,
        RoleType::PostdoctoralScholar,
        RoleType::Other,
    ];

    /// Parse the `Type` column. Exact labels only; anything else is `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            ROLE_GRADUATE_STUDENT => RoleType::GraduateStudent,
            ROLE_PHD_GRANTED => RoleType::PhDGranted,
            ROLE_POSTDOCTORAL_SCHOLAR => RoleType::PostdoctoralScholar,
            _ => RoleType::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoleType::GraduateStudent => ROLE_GRADUATE_STUDENT,
            RoleType::PhDGranted => ROLE_PHD_GRANTED,
            RoleType::PostdoctoralScholar => ROLE_POSTDOCTORAL_SCHOLAR,
            RoleType::Other => "Other",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse career domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    Industry,
    Academia,
    Both,
    Unknown,
}

impl Sector {
    pub const ALL: [Sector; 4] = [Sector::Industry, Sector::Academia, Sector::Both, Sector::Unknown];

    /// Map a raw sector label through the literal compatibility table.
    ///
    /// Matching is case-sensitive and untrimmed on purpose: `"INDUSTRY"` and
    /// `" industry"` both map to `Unknown`.
    pub fn from_raw(raw: &str) -> Self {
        SECTOR_TABLE
            .iter()
            .find(|(label, _)| *label == raw)
            .map(|(_, canonical)| Self::from_canonical(canonical))
            .unwrap_or(Sector::Unknown)
    }

    fn from_canonical(name: &str) -> Self {
        match name {
            "Industry" => Sector::Industry,
            "Academia" => Sector::Academia,
            "Both" => Sector::Both,
            _ => Sector::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sector::Industry => "Industry",
            Sector::Academia => "Academia",
            Sector::Both => "Both",
            Sector::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a cohort year cell.
///
/// Accepts integers and floats with no fractional part (`"2015.0"`).
/// Returns `None` for anything else; no range check is applied.
pub fn parse_cohort_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

/// One alumnus, normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlumniRecord {
    pub name: String,
    pub cohort_year: Option<i32>,
    pub role_type: RoleType,
    /// The sector cell as read, before mapping.
    pub sector_raw: String,
    pub sector: Sector,
    pub position_primary: Field,
    pub position_secondary: Field,
    pub org_primary: Field,
    pub org_secondary: Field,
    pub profile_url: Field,
}

impl AlumniRecord {
    /// Minimal record with every optional field absent. Mostly for tests and
    /// callers that bypass the normalizer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cohort_year: None,
            role_type: RoleType::Other,
            sector_raw: String::new(),
            sector: Sector::Unknown,
            position_primary: Field::Absent,
            position_secondary: Field::Absent,
            org_primary: Field::Absent,
            org_secondary: Field::Absent,
            profile_url: Field::Absent,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.cohort_year = Some(year);
        self
    }

    pub fn with_role(mut self, role_type: RoleType) -> Self {
        self.role_type = role_type;
        self
    }

    pub fn with_sector(mut self, raw: &str) -> Self {
        self.sector_raw = raw.to_string();
        self.sector = Sector::from_raw(raw);
        self
    }

    pub fn with_positions(mut self, primary: &str, secondary: Option<&str>) -> Self {
        self.position_primary = Field::from(primary);
        self.position_secondary = Field::from_raw(secondary);
        self
    }

    pub fn with_orgs(mut self, primary: Option<&str>, secondary: Option<&str>) -> Self {
        self.org_primary = Field::from_raw(primary);
        self.org_secondary = Field::from_raw(secondary);
        self
    }

    pub fn with_profile(mut self, url: &str) -> Self {
        self.profile_url = Field::from(url);
        self
    }
}
