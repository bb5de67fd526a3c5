//! Raw row as handed over by the table loader.

use serde::{Deserialize, Serialize};

use super::collections::FxHashMap;

/// One input row: column name to raw cell value, in source column order.
///
/// Column names may carry surrounding whitespace; lookups trim them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    cells: Vec<(String, Option<String>)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        }
    }

    pub fn push(&mut self, column: impl Into<String>, value: Option<String>) {
        self.cells.push((column.into(), value));
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every cell is absent or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.cells
            .iter()
            .all(|(_, v)| v.as_deref().map_or(true, |s| s.trim().is_empty()))
    }

    /// Index of trimmed column name to cell value. First occurrence wins.
    pub fn index(&self) -> FxHashMap<&str, Option<&str>> {
        let mut map = FxHashMap::default();
        for (column, value) in &self.cells {
            map.entry(column.trim()).or_insert(value.as_deref());
        }
        map
    }

    /// Look up a column by trimmed name.
    ///
    /// `None` means the column is not in the row at all; `Some(None)` means
    /// the column exists but the cell is absent.
    pub fn get(&self, column: &str) -> Option<Option<&str>> {
        let wanted = column.trim();
        self.cells
            .iter()
            .find(|(name, _)| name.trim() == wanted)
            .map(|(_, value)| value.as_deref())
    }
}
