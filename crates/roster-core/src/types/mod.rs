//! Data model shared by every roster component.

pub mod category;
pub mod collections;
pub mod field;
pub mod raw_row;
pub mod record;

pub use category::{CategoryLabel, CategorySet};
pub use field::Field;
pub use raw_row::RawRow;
pub use record::{parse_cohort_year, AlumniRecord, RoleType, Sector};
