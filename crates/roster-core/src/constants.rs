//! Shared constants for the roster analysis engine.

/// Placeholder used in the source roster for "not yet researched".
pub const MISSING_SENTINEL: &str = "???";

/// Literal fill markers that count as missing alongside a truly absent cell.
pub const MISSING_FILL_MARKERS: [&str; 2] = ["nan", "unknown"];

/// Earliest cohort year considered by the timeline aggregations.
pub const DEFAULT_TIMELINE_CUTOFF_YEAR: i32 = 2008;

/// Number of entries kept in the ranked affiliation list.
pub const DEFAULT_TOP_AFFILIATIONS: usize = 15;

/// Width of a decade bucket in years.
pub const DECADE_WIDTH: i32 = 10;

// ---- Column names ----

pub const COLUMN_NAME: &str = "Name";
pub const COLUMN_TYPE: &str = "Type";
pub const COLUMN_YEAR: &str = "Year";
pub const COLUMN_SECTOR: &str = "Industry or Academia?";
pub const COLUMN_POSITION_PRIMARY: &str = "Position 1";
pub const COLUMN_POSITION_SECONDARY: &str = "Position 2 or Past Position";
pub const COLUMN_ORG_PRIMARY: &str = "Company/University 1";
pub const COLUMN_ORG_SECONDARY: &str = "Company/University 2";

/// Default header of the optional profile-link column.
pub const DEFAULT_PROFILE_COLUMN: &str = "Company website, profile page, LinkedIn";

/// Columns every row is expected to carry. A row lacking one of these is
/// tolerated but reported as a non-fatal issue.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    COLUMN_NAME,
    COLUMN_TYPE,
    COLUMN_YEAR,
    COLUMN_SECTOR,
    COLUMN_POSITION_PRIMARY,
    COLUMN_POSITION_SECONDARY,
    COLUMN_ORG_PRIMARY,
    COLUMN_ORG_SECONDARY,
];

// ---- Sector mapping ----

/// Literal sector labels, matched case-sensitively. Anything else is Unknown.
/// "INDUSTRY" deliberately falls through.
pub const SECTOR_TABLE: [(&str, &str); 5] = [
    ("industry", "Industry"),
    ("academia", "Academia"),
    ("academia/industry", "Both"),
    ("Industry", "Industry"),
    ("Academia", "Academia"),
];

// ---- Role type labels ----

pub const ROLE_GRADUATE_STUDENT: &str = "Graduate Student";
pub const ROLE_PHD_GRANTED: &str = "PhD Granted";
pub const ROLE_POSTDOCTORAL_SCHOLAR: &str = "Postdoctoral Scholar";

// ---- Classifier keyword groups ----

pub const CEO_FOUNDER_KEYWORDS: [&str; 4] = ["CEO", "Chief Executive", "Co-founder", "Founder"];

pub const CTO_KEYWORDS: [&str; 3] = ["CTO", "Chief Technology", "Chief Technical"];

pub const FACULTY_KEYWORDS: [&str; 4] = [
    "Professor",
    "Assistant Professor",
    "Associate Professor",
    "Full Professor",
];

pub const SENIOR_LEADERSHIP_KEYWORDS: [&str; 6] = [
    "Chief",
    "Director",
    "VP",
    "Vice President",
    "Head of",
    "Lead",
];

/// Seven-keyword test behind the per-year leadership rate. Kept apart from the
/// four classifier groups; merging them shifts the trend numbers.
pub const LEADERSHIP_RATE_KEYWORDS: [&str; 7] = [
    "CEO",
    "CTO",
    "Founder",
    "Co-founder",
    "Professor",
    "Assistant Professor",
    "Associate Professor",
];

// ---- Reference lists ----

pub const NOTABLE_COMPANIES: [&str; 20] = [
    "Google",
    "Microsoft",
    "Amazon",
    "Apple",
    "Meta",
    "Facebook",
    "Databricks",
    "OpenAI",
    "Anthropic",
    "Nvidia",
    "Uber",
    "Airbnb",
    "Splunk",
    "Oracle",
    "Salesforce",
    "Tesla",
    "Netflix",
    "Adobe",
    "Intel",
    "Qualcomm",
];

pub const NOTABLE_UNIVERSITIES: [&str; 14] = [
    "MIT",
    "Stanford",
    "Harvard",
    "UC Berkeley",
    "Carnegie Mellon",
    "Princeton",
    "Yale",
    "Columbia",
    "Cornell",
    "University of Washington",
    "University of Michigan",
    "Georgia Tech",
    "University of Texas",
    "University of Wisconsin",
];

// ---- Benchmark baselines (percent) ----

pub const DEFAULT_BASELINE_FACULTY: f64 = 18.0;
pub const DEFAULT_BASELINE_CEO_FOUNDER: f64 = 2.5;
pub const DEFAULT_BASELINE_CTO: f64 = 1.0;
pub const DEFAULT_BASELINE_SENIOR_LEADERSHIP: f64 = 2.0;
