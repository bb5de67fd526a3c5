//! End-to-end analysis tests over a small hand-checked roster.

use roster_analysis::metrics::TrendDirection;
use roster_analysis::{AnalysisReport, RosterAnalyzer};
use roster_core::types::{CategoryLabel, CategorySet, RawRow, RoleType, Sector};
use roster_core::{AnalysisError, RosterConfig};

#[allow(clippy::too_many_arguments)]
fn row(
    name: &str,
    role: &str,
    year: &str,
    sector: &str,
    position: &str,
    past_position: Option<&str>,
    org: Option<&str>,
    past_org: Option<&str>,
) -> RawRow {
    RawRow::from_pairs([
        ("Name", Some(name)),
        ("Type", Some(role)),
        ("Year", Some(year)),
        ("Industry or Academia?", Some(sector)),
        ("Position 1", Some(position)),
        ("Position 2 or Past Position", past_position),
        ("Company/University 1", org),
        ("Company/University 2", past_org),
    ])
}

/// Ten alumni: 2 "industry", 3 "Academia", 5 sectors outside the table.
fn roster() -> Vec<RawRow> {
    vec![
        row("Avery", "PhD Granted", "2010", "industry", "Co-founder and CEO", Some("Professor"), Some("Stealth Startup"), None),
        row("Blake", "Graduate Student", "2011", "industry", "Software Engineer", None, Some("Google Research"), None),
        row("Casey", "Postdoctoral Scholar", "2011", "Academia", "Assistant Professor", None, Some("Stanford University"), None),
        row("Devon", "PhD Granted", "2012", "Academia", "???", None, None, None),
        row("Emery", "PhD Granted", "2012", "Academia", "Research Scientist", Some("Engineer"), Some("Amazon Science / Stanford"), None),
        row("Finley", "Graduate Student", "2013", "INDUSTRY", "CTO", None, Some("Databricks"), Some("databricks inc.")),
        row("Gray", "PhD Granted", "2013.0", "", "Director of Engineering", None, Some("Microsoft"), Some("MIT")),
        row("Harper", "Visiting Researcher", "n/a", "government", "nan", None, Some("unknown"), None),
        row("Indigo", "PhD Granted", "2007", "Academia ", "Senior Manager", None, None, None),
        row("Jules", "Graduate Student", "2014", "N/A", "VP of Product", None, Some("Meta Platforms"), None),
    ]
}

fn analyze(rows: &[RawRow]) -> AnalysisReport {
    RosterAnalyzer::with_defaults()
        .unwrap()
        .analyze(rows)
        .unwrap()
}

fn labels(report: &AnalysisReport, name: &str) -> CategorySet {
    report
        .records
        .iter()
        .find(|r| r.record.name == name)
        .map(|r| r.labels.clone())
        .unwrap()
}

/// A founder who is also a professor carries both labels.
#[test]
fn test_multi_label_classification() {
    let report = analyze(&roster());
    let avery = labels(&report, "Avery");
    assert_eq!(
        avery.iter().collect::<Vec<_>>(),
        vec![CategoryLabel::CeoFounder, CategoryLabel::Faculty]
    );
    // "Director" satisfies both the CTO and senior leadership groups.
    let gray = labels(&report, "Gray");
    assert!(gray.contains(CategoryLabel::Cto));
    assert!(gray.contains(CategoryLabel::SeniorLeadership));
}

/// The research placeholder is incomplete and classified as Other.
#[test]
fn test_placeholder_position() {
    let report = analyze(&roster());
    let devon = report.records.iter().find(|r| r.record.name == "Devon").unwrap();
    assert!(devon.incomplete);
    assert!(devon.labels.is_other());
    assert!(!devon.has_leadership);
}

#[test]
fn test_sector_distribution() {
    let report = analyze(&roster());
    let shares: Vec<(Sector, usize, f64)> = report
        .metrics
        .sector_distribution
        .iter()
        .map(|s| (s.sector, s.count, s.percentage))
        .collect();
    assert_eq!(
        shares,
        vec![
            (Sector::Industry, 2, 20.0),
            (Sector::Academia, 3, 30.0),
            (Sector::Unknown, 5, 50.0),
        ]
    );
}

/// Labels overlap, so the category rates must not be forced into a partition.
#[test]
fn test_category_rates_are_not_a_partition() {
    let report = analyze(&roster());
    let metrics = &report.metrics;
    let rate = |label: CategoryLabel| metrics.category_rate(label).unwrap().percentage;
    assert_eq!(rate(CategoryLabel::CeoFounder), 10.0);
    assert_eq!(rate(CategoryLabel::Cto), 20.0);
    assert_eq!(rate(CategoryLabel::Faculty), 20.0);
    assert_eq!(rate(CategoryLabel::SeniorLeadership), 20.0);
    assert_eq!(rate(CategoryLabel::Other), 50.0);

    let sum: f64 = metrics.category_rates.iter().map(|r| r.percentage).sum();
    assert!(sum > 100.0, "overlapping labels sum past 100, got {}", sum);
}

#[test]
fn test_worklist_order_and_contents() {
    let report = analyze(&roster());
    let names: Vec<&str> = report.worklist.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Devon", "Harper"]);
    assert_eq!(report.worklist[1].role_type, RoleType::Other);
    assert_eq!(report.worklist[1].cohort_year, None);
    assert_eq!(report.metrics.completeness.incomplete, 2);
    assert_eq!(report.metrics.completeness.complete_percentage, 80.0);
}

/// Every dated record is counted per year, including years before the cutoff.
#[test]
fn test_year_type_counts_dense() {
    let report = analyze(&roster());
    let counts = &report.metrics.year_type_counts;
    assert_eq!(
        counts.keys().copied().collect::<Vec<_>>(),
        vec![2007, 2010, 2011, 2012, 2013, 2014]
    );
    for year_counts in counts.values() {
        // Dense: every role type readable for every year.
        let total: usize = RoleType::ALL.iter().map(|&r| year_counts.get(r)).sum();
        assert_eq!(total, year_counts.total());
    }
    assert_eq!(counts[&2011].graduate_student, 1);
    assert_eq!(counts[&2011].postdoctoral_scholar, 1);
    assert_eq!(counts[&2011].phd_granted, 0);
    assert_eq!(counts[&2013].phd_granted, 1, "2013.0 parses as 2013");
    assert_eq!(report.metrics.undated_records, 1);
}

#[test]
fn test_timeline_from_cutoff() {
    let report = analyze(&roster());
    let timeline = &report.metrics.timeline;
    assert_eq!(timeline.cutoff_year, 2008);
    assert_eq!(timeline.record_count, 8);

    let rates: Vec<(i32, f64)> = timeline
        .leadership_by_year
        .iter()
        .map(|y| (y.year, y.rate))
        .collect();
    assert_eq!(
        rates,
        vec![(2010, 100.0), (2011, 50.0), (2012, 0.0), (2013, 100.0), (2014, 0.0)]
    );

    let share_2011 = &timeline.sector_by_year[1];
    assert_eq!(share_2011.year, 2011);
    assert_eq!(share_2011.industry_percentage, 50.0);
    assert_eq!(share_2011.academia_percentage, 50.0);

    let trend = timeline.trend.unwrap();
    assert!((trend.slope - (-15.0)).abs() < 1e-9, "slope was {}", trend.slope);
    assert_eq!(trend.direction, TrendDirection::StableOrDecreasing);

    assert_eq!(timeline.decades.len(), 1);
    assert_eq!(timeline.decades[0].decade, 2010);
    assert_eq!(timeline.decades[0].rate, 50.0);

    let insights = timeline.insights.as_ref().unwrap();
    assert_eq!(insights.peak_cohort_year, 2011);
    assert_eq!(insights.span_years, 4);
    assert_eq!(insights.average_leadership_rate, 50.0);
    assert_eq!(insights.peak_leadership_year, 2010);
}

#[test]
fn test_affiliations_ranked() {
    let report = analyze(&roster());
    assert_eq!(report.affiliations.get("Google"), 1);
    assert_eq!(report.affiliations.get("Amazon"), 1);
    assert_eq!(report.affiliations.get("Stanford"), 1, "only Casey credits Stanford");
    assert_eq!(report.affiliations.get("Databricks"), 1);
    assert_eq!(report.metrics.distinct_affiliations, 7);

    let ranked: Vec<&str> = report
        .metrics
        .top_affiliations
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(
        ranked,
        vec!["Google", "Microsoft", "Amazon", "Meta", "Databricks", "MIT", "Stanford"]
    );

    let gray = report.records.iter().find(|r| r.record.name == "Gray").unwrap();
    assert_eq!(gray.affiliations.as_slice(), ["Microsoft".to_string(), "MIT".to_string()]);
}

#[test]
fn test_benchmark_multipliers() {
    let report = analyze(&roster());
    let multiplier = |label: CategoryLabel| {
        report
            .metrics
            .benchmark
            .iter()
            .find(|b| b.label == label)
            .and_then(|b| b.multiplier)
            .unwrap()
    };
    assert_eq!(multiplier(CategoryLabel::CeoFounder), 4.0);
    assert_eq!(multiplier(CategoryLabel::Cto), 20.0);
    assert_eq!(multiplier(CategoryLabel::SeniorLeadership), 10.0);
    assert!(report.metrics.benchmark.iter().all(|b| b.label != CategoryLabel::Other));
}

#[test]
fn test_configured_cutoff_and_top_list() {
    let config = RosterConfig::from_toml(
        r#"
[timeline]
cutoff_year = 2012

[affiliations]
top_affiliations = 2
"#,
    )
    .unwrap();
    let report = RosterAnalyzer::new(&config).unwrap().analyze(&roster()).unwrap();
    assert_eq!(report.metrics.timeline.record_count, 5);
    assert_eq!(report.metrics.top_affiliations.len(), 2);
    assert_eq!(report.metrics.distinct_affiliations, 7);
}

#[test]
fn test_row_issues_are_reported_not_fatal() {
    let mut rows = roster();
    rows.push(RawRow::from_pairs([("Name", Some("Kai")), ("Year", Some("2015"))]));
    let report = analyze(&rows);
    assert_eq!(report.records.len(), 11);
    assert!(!report.is_clean());
    assert!(report.issues.iter().all(|issue| issue.row() == 10));
    // The missing position column reads as the placeholder.
    assert_eq!(report.worklist.last().unwrap().name, "Kai");
}

#[test]
fn test_input_order_does_not_change_metrics() {
    let forward = analyze(&roster());
    let mut reversed_rows = roster();
    reversed_rows.reverse();
    let reversed = analyze(&reversed_rows);
    assert_eq!(forward.metrics, reversed.metrics);
}

/// One decimal place with ties to even: 1 of 16 (6.25%) reads as 6.2.
#[test]
fn test_population_rates_round_ties_to_even() {
    let mut rows = vec![row("Quinn", "PhD Granted", "2015", "industry", "CTO", None, None, None)];
    for i in 0..15 {
        rows.push(row(&format!("Eng{i}"), "PhD Granted", "2015", "Academia", "Engineer", None, None, None));
    }
    let report = analyze(&rows);
    let metrics = &report.metrics;
    assert_eq!(metrics.category_rate(CategoryLabel::Cto).unwrap().percentage, 6.2);
    assert_eq!(metrics.category_rate(CategoryLabel::Other).unwrap().percentage, 93.8);

    let sector = |s: Sector| {
        metrics
            .sector_distribution
            .iter()
            .find(|share| share.sector == s)
            .unwrap()
            .percentage
    };
    assert_eq!(sector(Sector::Industry), 6.2);
    assert_eq!(sector(Sector::Academia), 93.8);
    assert_eq!(metrics.sector_by_role[0].shares[0].percentage, 6.2);
}

#[test]
fn test_empty_roster_is_insufficient_data() {
    let analyzer = RosterAnalyzer::with_defaults().unwrap();
    let err = analyzer.analyze_records(Vec::new()).unwrap_err();
    assert!(matches!(err, AnalysisError::InsufficientData { .. }));
}

#[test]
fn test_report_serializes_to_json() {
    let json = analyze(&roster()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metrics"]["total_records"], 10);
    assert_eq!(value["records"][0]["labels"][0], "CEO_Founder");
    assert_eq!(value["worklist"][0]["name"], "Devon");
}
