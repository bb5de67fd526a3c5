//! Top-level roster configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    AffiliationConfig, BenchmarkConfig, ClassifierConfig, ColumnConfig, LeadershipConfig,
    TimelineConfig,
};
use crate::errors::ConfigError;
use crate::types::CategoryLabel;

/// Project config file name, looked up in the analysis root.
pub const PROJECT_CONFIG_FILE: &str = "roster.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ROSTER_*`)
/// 2. Project config (`roster.toml` in the root directory)
/// 3. User config (`~/.roster/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RosterConfig {
    pub classifier: ClassifierConfig,
    pub leadership: LeadershipConfig,
    pub affiliations: AffiliationConfig,
    pub timeline: TimelineConfig,
    pub benchmark: BenchmarkConfig,
    pub columns: ColumnConfig,
}

impl RosterConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only a parse failure is fatal here.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        tracing::debug!(root = %root.display(), "roster config resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &RosterConfig) -> Result<(), ConfigError> {
        let keyword_tables: [(&str, &[String]); 5] = [
            ("classifier.ceo_founder_keywords", config.classifier.ceo_founder_keywords.as_slice()),
            ("classifier.cto_keywords", config.classifier.cto_keywords.as_slice()),
            ("classifier.faculty_keywords", config.classifier.faculty_keywords.as_slice()),
            (
                "classifier.senior_leadership_keywords",
                config.classifier.senior_leadership_keywords.as_slice(),
            ),
            ("leadership.keywords", config.leadership.keywords.as_slice()),
        ];
        for (field, keywords) in keyword_tables {
            reject_blank_entries(field, keywords)?;
        }
        reject_blank_entries("affiliations.companies", &config.affiliations.companies)?;
        reject_blank_entries("affiliations.universities", &config.affiliations.universities)?;

        if config.affiliations.top_affiliations == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "affiliations.top_affiliations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        for label in CategoryLabel::KEYWORD_BACKED {
            if let Some(baseline) = config.benchmark.effective_baseline(label) {
                if !baseline.is_finite() || baseline < 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("benchmark.{}", benchmark_key(label)),
                        message: "must be a non-negative percentage".to_string(),
                    });
                }
            }
        }

        if let Some(ref column) = config.columns.profile_column {
            if column.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "columns.profile_column".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.roster/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".roster").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut RosterConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RosterConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. Values in `other` win only when set.
    fn merge(base: &mut RosterConfig, other: &RosterConfig) {
        // Classifier
        merge_list(
            &mut base.classifier.ceo_founder_keywords,
            &other.classifier.ceo_founder_keywords,
        );
        merge_list(&mut base.classifier.cto_keywords, &other.classifier.cto_keywords);
        merge_list(
            &mut base.classifier.faculty_keywords,
            &other.classifier.faculty_keywords,
        );
        merge_list(
            &mut base.classifier.senior_leadership_keywords,
            &other.classifier.senior_leadership_keywords,
        );

        // Leadership
        merge_list(&mut base.leadership.keywords, &other.leadership.keywords);

        // Affiliations
        merge_list(&mut base.affiliations.companies, &other.affiliations.companies);
        merge_list(
            &mut base.affiliations.universities,
            &other.affiliations.universities,
        );
        if other.affiliations.top_affiliations.is_some() {
            base.affiliations.top_affiliations = other.affiliations.top_affiliations;
        }

        // Timeline
        if other.timeline.cutoff_year.is_some() {
            base.timeline.cutoff_year = other.timeline.cutoff_year;
        }

        // Benchmark
        if other.benchmark.faculty.is_some() {
            base.benchmark.faculty = other.benchmark.faculty;
        }
        if other.benchmark.ceo_founder.is_some() {
            base.benchmark.ceo_founder = other.benchmark.ceo_founder;
        }
        if other.benchmark.cto.is_some() {
            base.benchmark.cto = other.benchmark.cto;
        }
        if other.benchmark.senior_leadership.is_some() {
            base.benchmark.senior_leadership = other.benchmark.senior_leadership;
        }

        // Columns
        if other.columns.profile_column.is_some() {
            base.columns.profile_column = other.columns.profile_column.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ROSTER_TIMELINE_CUTOFF_YEAR`, `ROSTER_TOP_AFFILIATIONS`, etc.
    fn apply_env_overrides(config: &mut RosterConfig) {
        if let Ok(val) = std::env::var("ROSTER_TIMELINE_CUTOFF_YEAR") {
            if let Ok(v) = val.parse::<i32>() {
                config.timeline.cutoff_year = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ROSTER_TOP_AFFILIATIONS") {
            if let Ok(v) = val.parse::<usize>() {
                config.affiliations.top_affiliations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ROSTER_PROFILE_COLUMN") {
            config.columns.profile_column = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn merge_list(base: &mut Vec<String>, other: &[String]) {
    if !other.is_empty() {
        *base = other.to_vec();
    }
}

fn reject_blank_entries(field: &str, entries: &[String]) -> Result<(), ConfigError> {
    if entries.iter().any(|e| e.trim().is_empty()) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "entries must not be blank".to_string(),
        });
    }
    Ok(())
}

fn benchmark_key(label: CategoryLabel) -> &'static str {
    match label {
        CategoryLabel::CeoFounder => "ceo_founder",
        CategoryLabel::Cto => "cto",
        CategoryLabel::Faculty => "faculty",
        CategoryLabel::SeniorLeadership => "senior_leadership",
        CategoryLabel::Other => "other",
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
