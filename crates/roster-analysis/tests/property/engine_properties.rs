use proptest::prelude::*;

use roster_analysis::{AffiliationExtractor, PositionClassifier, RosterAnalyzer};
use roster_core::config::{AffiliationConfig, ClassifierConfig};
use roster_core::types::{AlumniRecord, CategoryLabel, Field, RoleType};

const POSITION_FRAGMENTS: [&str; 12] = [
    "Co-founder", "CEO", "cto", "Professor", "Director", "VP", "Engineer",
    "Head of Data", "???", "nan", "Chief of Staff", "Scientist",
];

const ORG_FRAGMENTS: [&str; 10] = [
    "Google", "MIT", "Stanford", "Amazon Science", "stealth", "unknown",
    "Databricks", "Harvard Medical", "Acme", "Microsoft Research",
];

const SECTORS: [&str; 6] = ["industry", "Academia", "academia/industry", "INDUSTRY", "", "other"];

fn position() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(POSITION_FRAGMENTS.to_vec()).prop_map(str::to_string),
        "[A-Za-z ?-]{0,24}",
        (
            prop::sample::select(POSITION_FRAGMENTS.to_vec()),
            prop::sample::select(POSITION_FRAGMENTS.to_vec()),
        )
            .prop_map(|(a, b)| format!("{a} and {b}")),
    ]
}

fn org() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        prop::sample::select(ORG_FRAGMENTS.to_vec()).prop_map(str::to_string),
        "[A-Za-z ]{0,20}",
    ])
}

fn record() -> impl Strategy<Value = AlumniRecord> {
    (
        "[A-Z][a-z]{1,8}",
        prop::option::of(2000i32..2022),
        prop::sample::select(RoleType::ALL.to_vec()),
        prop::sample::select(SECTORS.to_vec()),
        position(),
        prop::option::of(position()),
        org(),
        org(),
    )
        .prop_map(|(name, year, role, sector, primary, secondary, org1, org2)| {
            let mut record = AlumniRecord::new(name)
                .with_role(role)
                .with_sector(sector)
                .with_positions(&primary, secondary.as_deref())
                .with_orgs(org1.as_deref(), org2.as_deref());
            record.cohort_year = year;
            record
        })
}

proptest! {
    #[test]
    fn label_set_is_never_empty(primary in position(), secondary in position()) {
        let classifier = PositionClassifier::new(&ClassifierConfig::default()).unwrap();
        let labels = classifier.classify(&Field::from(primary.as_str()), &Field::from(secondary.as_str()));
        prop_assert!(!labels.is_empty());
        if labels.contains(CategoryLabel::Other) {
            prop_assert_eq!(labels.len(), 1, "Other must stand alone");
        }
    }

    #[test]
    fn text_without_keywords_is_other(primary in "[xqz0-9 ]{0,30}", secondary in "[xqz0-9 ]{0,30}") {
        let classifier = PositionClassifier::new(&ClassifierConfig::default()).unwrap();
        let labels = classifier.classify(&Field::from(primary.as_str()), &Field::from(secondary.as_str()));
        prop_assert!(labels.is_other());
    }

    #[test]
    fn affiliation_credits_are_bounded(r in record()) {
        let extractor = AffiliationExtractor::new(&AffiliationConfig::default());
        let credits = extractor.credits(&r);
        prop_assert!(credits.len() <= 2);
        if credits.len() == 2 {
            prop_assert_ne!(credits[0], credits[1]);
        }
    }

    #[test]
    fn year_buckets_are_dense_and_complete(records in prop::collection::vec(record(), 1..40)) {
        let analyzer = RosterAnalyzer::with_defaults().unwrap();
        let report = analyzer.analyze_records(records.clone()).unwrap();
        let counts = &report.metrics.year_type_counts;

        for (year, year_counts) in counts {
            let expected = records.iter().filter(|r| r.cohort_year == Some(*year)).count();
            prop_assert_eq!(year_counts.total(), expected);
            prop_assert!(expected > 0);
        }
        let dated: usize = counts.values().map(|c| c.total()).sum();
        prop_assert_eq!(dated + report.metrics.undated_records, records.len());
    }

    #[test]
    fn metrics_ignore_input_order(
        (records, shuffled) in prop::collection::vec(record(), 1..30)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let analyzer = RosterAnalyzer::with_defaults().unwrap();
        let a = analyzer.analyze_records(records).unwrap();
        let b = analyzer.analyze_records(shuffled).unwrap();
        prop_assert_eq!(a.metrics, b.metrics);
        prop_assert_eq!(a.affiliations, b.affiliations);
    }

    #[test]
    fn worklist_is_input_ordered_subsequence(records in prop::collection::vec(record(), 1..30)) {
        let analyzer = RosterAnalyzer::with_defaults().unwrap();
        let report = analyzer.analyze_records(records).unwrap();
        let expected: Vec<&str> = report
            .records
            .iter()
            .filter(|r| r.incomplete)
            .map(|r| r.record.name.as_str())
            .collect();
        let actual: Vec<&str> = report.worklist.iter().map(|e| e.name.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }
}
