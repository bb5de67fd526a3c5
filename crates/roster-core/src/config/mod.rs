//! Configuration system for roster.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod affiliation_config;
pub mod benchmark_config;
pub mod classifier_config;
pub mod column_config;
pub mod leadership_config;
pub mod roster_config;
pub mod timeline_config;

pub use affiliation_config::AffiliationConfig;
pub use benchmark_config::BenchmarkConfig;
pub use classifier_config::ClassifierConfig;
pub use column_config::ColumnConfig;
pub use leadership_config::LeadershipConfig;
pub use roster_config::RosterConfig;
pub use timeline_config::TimelineConfig;
