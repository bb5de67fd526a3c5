//! Career-outcome category labels and the multi-label set.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Career-outcome category assigned by the position classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryLabel {
    #[serde(rename = "CEO_Founder")]
    CeoFounder,
    #[serde(rename = "CTO")]
    Cto,
    Faculty,
    SeniorLeadership,
    Other,
}

impl CategoryLabel {
    pub const ALL: [CategoryLabel; 5] = [
        CategoryLabel::CeoFounder,
        CategoryLabel::Cto,
        CategoryLabel::Faculty,
        CategoryLabel::SeniorLeadership,
        CategoryLabel::Other,
    ];

    /// Labels backed by a keyword group (everything except `Other`).
    pub const KEYWORD_BACKED: [CategoryLabel; 4] = [
        CategoryLabel::CeoFounder,
        CategoryLabel::Cto,
        CategoryLabel::Faculty,
        CategoryLabel::SeniorLeadership,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CategoryLabel::CeoFounder => "CEO/Founder",
            CategoryLabel::Cto => "CTO",
            CategoryLabel::Faculty => "Faculty",
            CategoryLabel::SeniorLeadership => "Senior Leadership",
            CategoryLabel::Other => "Other",
        }
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, duplicate-free set of labels. At most four keyword labels can be
/// present at once, so it never spills to the heap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet(SmallVec<[CategoryLabel; 4]>);

impl CategorySet {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// The fallback set `{Other}`.
    pub fn other() -> Self {
        let mut set = Self::new();
        set.insert(CategoryLabel::Other);
        set
    }

    /// Insert keeping declaration order. Returns false if already present.
    pub fn insert(&mut self, label: CategoryLabel) -> bool {
        match self.0.binary_search(&label) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, label);
                true
            }
        }
    }

    pub fn contains(&self, label: CategoryLabel) -> bool {
        self.0.binary_search(&label).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_other(&self) -> bool {
        self.0.as_slice() == [CategoryLabel::Other]
    }

    pub fn iter(&self) -> impl Iterator<Item = CategoryLabel> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CategoryLabel> for CategorySet {
    fn from_iter<I: IntoIterator<Item = CategoryLabel>>(iter: I) -> Self {
        let mut set = Self::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}
