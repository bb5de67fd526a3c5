//! Input column configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PROFILE_COLUMN;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ColumnConfig {
    /// Header of the optional profile-link column.
    pub profile_column: Option<String>,
}

impl ColumnConfig {
    pub fn effective_profile_column(&self) -> &str {
        self.profile_column.as_deref().unwrap_or(DEFAULT_PROFILE_COLUMN)
    }
}
