//! Record normalizer: raw rows in, canonical [`AlumniRecord`]s out.
//!
//! Blank rows are dropped. A row missing a required column is kept, with the
//! missing-field sentinel substituted and a non-fatal issue recorded.

use roster_core::config::ColumnConfig;
use roster_core::constants::{
    COLUMN_NAME, COLUMN_ORG_PRIMARY, COLUMN_ORG_SECONDARY, COLUMN_POSITION_PRIMARY,
    COLUMN_POSITION_SECONDARY, COLUMN_SECTOR, COLUMN_TYPE, COLUMN_YEAR, MISSING_SENTINEL,
    REQUIRED_COLUMNS,
};
use roster_core::errors::{AnalysisOutcome, NormalizeError};
use roster_core::tracing::fields;
use roster_core::types::collections::FxHashMap;
use roster_core::types::{parse_cohort_year, AlumniRecord, Field, RawRow, RoleType, Sector};

/// Converts raw rows into [`AlumniRecord`]s.
#[derive(Debug, Clone)]
pub struct Normalizer {
    profile_column: String,
}

impl Normalizer {
    pub fn new(columns: &ColumnConfig) -> Self {
        Self {
            profile_column: columns.effective_profile_column().trim().to_string(),
        }
    }

    /// Normalize every row, preserving input order.
    ///
    /// Issues carry the zero-based index of the row in `rows`, so they still
    /// point at the right row after blank rows are dropped.
    pub fn normalize(&self, rows: &[RawRow]) -> AnalysisOutcome<Vec<AlumniRecord>> {
        let mut outcome = AnalysisOutcome::new(Vec::with_capacity(rows.len()));
        let mut dropped = 0usize;

        for (row_idx, row) in rows.iter().enumerate() {
            if row.is_blank() {
                dropped += 1;
                continue;
            }
            let record = self.normalize_row(row_idx, row, &mut outcome.issues);
            outcome.data.push(record);
        }

        tracing::debug!(
            { fields::RECORDS_NORMALIZED } = outcome.data.len(),
            { fields::ROWS_DROPPED } = dropped,
            { fields::ROW_ISSUES } = outcome.issues.len(),
            "rows normalized"
        );
        outcome
    }

    fn normalize_row(
        &self,
        row_idx: usize,
        row: &RawRow,
        issues: &mut Vec<NormalizeError>,
    ) -> AlumniRecord {
        let cells = row.index();

        for column in REQUIRED_COLUMNS {
            if !cells.contains_key(column) {
                tracing::warn!(row = row_idx, column, "row is missing a required column");
                issues.push(NormalizeError::MissingColumn {
                    row: row_idx,
                    column: column.to_string(),
                });
            }
        }

        let name = match Field::from_raw(cell(&cells, COLUMN_NAME)) {
            Field::Text(name) => name,
            Field::Absent => {
                issues.push(NormalizeError::EmptyName { row: row_idx });
                MISSING_SENTINEL.to_string()
            }
        };

        // The sector cell is matched as read; see `Sector::from_raw`.
        let sector_raw = cell(&cells, COLUMN_SECTOR).unwrap_or_default().to_string();
        let sector = Sector::from_raw(&sector_raw);

        AlumniRecord {
            name,
            cohort_year: cell(&cells, COLUMN_YEAR).and_then(parse_cohort_year),
            role_type: cell(&cells, COLUMN_TYPE)
                .map(RoleType::from_label)
                .unwrap_or(RoleType::Other),
            sector_raw,
            sector,
            position_primary: self.required_field(&cells, COLUMN_POSITION_PRIMARY),
            position_secondary: self.required_field(&cells, COLUMN_POSITION_SECONDARY),
            org_primary: self.required_field(&cells, COLUMN_ORG_PRIMARY),
            org_secondary: self.required_field(&cells, COLUMN_ORG_SECONDARY),
            profile_url: Field::from_raw(cell(&cells, &self.profile_column)),
        }
    }

    /// A column that must exist. A missing column reads as the sentinel.
    fn required_field(&self, cells: &FxHashMap<&str, Option<&str>>, column: &str) -> Field {
        match cells.get(column) {
            Some(value) => Field::from_raw(*value),
            None => Field::Text(MISSING_SENTINEL.to_string()),
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&ColumnConfig::default())
    }
}

fn cell<'a>(cells: &FxHashMap<&str, Option<&'a str>>, column: &str) -> Option<&'a str> {
    cells.get(column).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row(name: &str, position: Option<&str>) -> RawRow {
        RawRow::from_pairs([
            (" Name", Some(name)),
            ("Type ", Some("PhD Granted")),
            ("Year", Some("2014")),
            ("Industry or Academia?", Some("industry")),
            ("Position 1", position),
            ("Position 2 or Past Position", None),
            ("Company/University 1", Some("Databricks")),
            ("Company/University 2", None),
        ])
    }

    #[test]
    fn padded_headers_are_trimmed() {
        let outcome = Normalizer::default().normalize(&[full_row("Ada", Some("CTO"))]);
        assert!(outcome.is_clean());
        let record = &outcome.data[0];
        assert_eq!(record.name, "Ada");
        assert_eq!(record.role_type, RoleType::PhDGranted);
        assert_eq!(record.cohort_year, Some(2014));
        assert_eq!(record.sector, Sector::Industry);
        assert_eq!(record.position_primary, Field::from("CTO"));
        assert!(record.position_secondary.is_absent());
    }

    #[test]
    fn blank_rows_are_dropped() {
        let blank = RawRow::from_pairs([("Name", None::<&str>), ("Year", Some(" "))]);
        let outcome = Normalizer::default().normalize(&[blank, full_row("Ada", None)]);
        assert_eq!(outcome.data.len(), 1);
        assert!(outcome.data[0].position_primary.is_absent());
    }

    #[test]
    fn missing_column_substitutes_sentinel() {
        let row = RawRow::from_pairs([("Name", Some("Bo")), ("Year", Some("2019"))]);
        let outcome = Normalizer::default().normalize(&[row]);
        let record = &outcome.data[0];
        assert!(record.position_primary.is_placeholder());
        assert_eq!(record.sector, Sector::Unknown);
        assert_eq!(record.role_type, RoleType::Other);
        assert_eq!(outcome.issue_count(), REQUIRED_COLUMNS.len() - 2);
        assert!(outcome.issues.iter().all(|issue| issue.row() == 0));
    }

    #[test]
    fn absent_name_is_flagged_and_replaced() {
        let outcome = Normalizer::default().normalize(&[full_row("  ", Some("VP"))]);
        assert_eq!(outcome.data[0].name, MISSING_SENTINEL);
        assert_eq!(outcome.issues, vec![NormalizeError::EmptyName { row: 0 }]);
    }

    #[test]
    fn profile_column_is_configurable() {
        let mut row = full_row("Ada", Some("CEO"));
        row.push("LinkedIn", Some("https://example.org/ada".to_string()));
        let columns = ColumnConfig {
            profile_column: Some("LinkedIn".to_string()),
        };
        let outcome = Normalizer::new(&columns).normalize(&[row]);
        assert_eq!(
            outcome.data[0].profile_url.as_text(),
            Some("https://example.org/ada")
        );
    }
}
