//! Integration tests for data quality scoring.
//!
//! These tests run the scorer end to end over CSV fixtures with a fixed
//! reference time.

use chrono::{NaiveDate, NaiveDateTime};
use dq_score::metrics::FreshnessOutcome;
use dq_score::{
    FreshnessDenominator, QualityConfig, QualityError, QualityScorer, ReportGenerator, dataset,
};
use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(filename: &str) -> DataFrame {
    dataset::load_csv(fixtures_path().join(filename)).expect("Failed to read CSV fixture")
}

fn as_of(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn default_scorer() -> QualityScorer {
    QualityScorer::new(QualityConfig::default()).unwrap()
}

// ============================================================================
// Sample Dataset
// ============================================================================

#[test]
fn test_csv_matches_builtin_sample() {
    let from_csv = default_scorer()
        .score(&load_fixture("customers.csv"), as_of(2021, 1, 20))
        .unwrap();
    let builtin = default_scorer()
        .score(&dataset::sample_customers().unwrap(), as_of(2021, 1, 20))
        .unwrap();

    assert_eq!(
        ReportGenerator::render_text(&from_csv),
        ReportGenerator::render_text(&builtin)
    );
}

#[test]
fn test_customers_text_report() {
    let assessment = default_scorer()
        .score(&load_fixture("customers.csv"), as_of(2021, 1, 20))
        .unwrap();

    assert_eq!(
        ReportGenerator::render_text(&assessment),
        "Completeness Score: 0.92\n\
         Uniqueness Score: 0.83\n\
         Consistency Score: 1.00\n\
         Freshness Score: 0.60\n\
         Velocity Score: 0.50\n\
         Criticality Score: 0.89\n\
         Overall Weighted Score: 0.82\n"
    );
}

#[test]
fn test_customers_years_later() {
    // Every signup is years old: nothing fresh, nothing recent
    let assessment = default_scorer()
        .score(&load_fixture("customers.csv"), as_of(2026, 10, 19))
        .unwrap();

    assert_eq!(assessment.scores.freshness, 0.0);
    assert_eq!(assessment.scores.velocity, 0.0);
    // 0.229167 + 0.166667 + 0.2 + 0 + 0 + 0.088889
    assert!((assessment.overall - 0.684_722).abs() < 1e-6);
}

// ============================================================================
// Score Properties
// ============================================================================

#[test]
fn test_all_scores_in_unit_interval() {
    for fixture in ["customers.csv", "mixed_dates.csv"] {
        for date in [as_of(2019, 1, 1), as_of(2021, 1, 20), as_of(2030, 6, 1)] {
            let assessment = default_scorer().score(&load_fixture(fixture), date).unwrap();
            for (metric, score) in assessment.scores.iter() {
                assert!(
                    (0.0..=1.0).contains(&score),
                    "{metric} out of range for {fixture}: {score}"
                );
            }
            assert!((0.0..=1.0 + 1e-9).contains(&assessment.overall));
        }
    }
}

#[test]
fn test_complete_table_scores_one() {
    let df = df![
        "CustomerID" => [1i64, 2, 3],
        "Name" => ["Alice", "Bob", "Charlie"],
        "Email" => ["a@example.com", "b@example.com", "c@example.com"],
        "SignupDate" => ["2021-01-18", "2021-01-19", "2021-01-20"],
    ]
    .unwrap();

    let assessment = default_scorer().score(&df, as_of(2021, 1, 20)).unwrap();
    for (metric, score) in assessment.scores.iter() {
        assert!((score - 1.0).abs() < 1e-12, "{metric} = {score}");
    }
    assert!((assessment.overall - 1.0).abs() < 1e-9);
}

// ============================================================================
// Degraded Input
// ============================================================================

#[test]
fn test_mixed_dates_degrade_gracefully() {
    let assessment = default_scorer()
        .score(&load_fixture("mixed_dates.csv"), as_of(2021, 1, 20))
        .unwrap();
    let details = &assessment.details;

    // one malformed date, one empty date
    assert_eq!(assessment.scores.consistency, 0.5);
    assert_eq!(details.consistency.invalid, vec![(1, "10/01/2021".to_string())]);
    assert_eq!(details.consistency.missing, vec![3]);

    // the malformed value sits in the freshness sample
    assert_eq!(
        details.freshness,
        FreshnessOutcome::Unparseable {
            value: "10/01/2021".to_string()
        }
    );
    assert_eq!(assessment.scores.freshness, 0.0);

    assert_eq!(details.velocity.recent_rows, 2);
    assert_eq!(details.velocity.unparseable_rows, 1);
    assert_eq!(details.velocity.missing_rows, 1);
    assert_eq!(assessment.scores.velocity, 0.5);
}

#[test]
fn test_header_only_csv_is_rejected() {
    let result = dataset::load_csv(fixtures_path().join("header_only.csv"))
        .and_then(|df| default_scorer().score(&df, as_of(2021, 1, 20)));

    match result {
        Err(QualityError::EmptyDataset { rows, .. }) => assert_eq!(rows, 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("empty dataset should not be scored"),
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_changes_weights_and_columns() {
    let config = QualityConfig::from_json_file(fixtures_path().join("weights.json")).unwrap();
    assert_eq!(config.params.uniqueness_column, "Email");

    let assessment = QualityScorer::new(config)
        .unwrap()
        .score(&load_fixture("customers.csv"), as_of(2021, 1, 20))
        .unwrap();

    // Email: alice, bob, null, david, eve, alice
    assert!((assessment.scores.uniqueness - 5.0 / 6.0).abs() < 1e-12);
    assert!((assessment.scores.criticality - 5.0 / 6.0).abs() < 1e-12);
    assert!((assessment.overall - 0.9).abs() < 1e-9);
}

#[test]
fn test_observed_freshness_denominator() {
    // signups on 2020-01-01 and 2020-01-02 only
    let df = load_fixture("customers.csv").head(Some(2));
    let now = as_of(2020, 6, 1);

    let fixed = QualityScorer::new(QualityConfig::default())
        .unwrap()
        .score(&df, now)
        .unwrap();
    let observed = QualityScorer::new(
        QualityConfig::builder()
            .freshness_denominator(FreshnessDenominator::Observed)
            .build()
            .unwrap(),
    )
    .unwrap()
    .score(&df, now)
    .unwrap();

    // two fresh values: 5/5 under the fixed denominator, 2/2 observed
    assert_eq!(fixed.scores.freshness, 1.0);
    assert_eq!(observed.scores.freshness, 1.0);

    let later = as_of(2021, 1, 2);
    let fixed = QualityScorer::new(QualityConfig::default())
        .unwrap()
        .score(&df, later)
        .unwrap();
    let observed = QualityScorer::new(
        QualityConfig::builder()
            .freshness_denominator(FreshnessDenominator::Observed)
            .build()
            .unwrap(),
    )
    .unwrap()
    .score(&df, later)
    .unwrap();

    // cutoff 2020-01-03: both values stale, 3/5 under the fixed denominator, 0/2 observed
    assert_eq!(fixed.scores.freshness, 0.6);
    assert_eq!(observed.scores.freshness, 0.0);
}

#[test]
fn test_criticality_column_missing_from_csv() {
    let config = QualityConfig::builder()
        .critical_column("Phone", 0.5)
        .build()
        .unwrap();
    let assessment = QualityScorer::new(config)
        .unwrap()
        .score(&load_fixture("customers.csv"), as_of(2021, 1, 20))
        .unwrap();

    // default columns give 4/3 of weighted completeness over 1.5; Phone only adds 0.5 weight
    let criticality = &assessment.details.criticality;
    assert!((assessment.scores.criticality - (4.0 / 3.0) / 2.0).abs() < 1e-12);
    assert_eq!(criticality.missing.len(), 1);
    assert_eq!(criticality.missing[0].column, "Phone");
}

#[test]
fn test_csv_without_email_still_scores() {
    let df = load_fixture("customers.csv").drop("Email").unwrap();
    let assessment = default_scorer().score(&df, as_of(2021, 1, 20)).unwrap();

    // CustomerID 5/6 * 0.5 + Name 0.2 + SignupDate 0.3 over 1.5
    let expected = (5.0 / 6.0 * 0.5 + 0.2 + 0.3) / 1.5;
    assert!((assessment.scores.criticality - expected).abs() < 1e-12);
    assert_eq!(assessment.details.criticality.missing[0].column, "Email");
}

#[test]
fn test_out_of_range_window_is_rejected() {
    let result = QualityConfig::builder()
        .freshness_threshold_days(200_000_000)
        .build();
    assert!(result.is_err());

    let mut config = QualityConfig::default();
    config.params.velocity_period_days = u32::MAX;
    let err = QualityScorer::new(config).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CONFIG");
}
