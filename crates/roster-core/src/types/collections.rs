//! Re-exports of the collection types used across the workspace.

pub use rustc_hash::FxHashMap;
pub use std::collections::{BTreeMap, BTreeSet};
