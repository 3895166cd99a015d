//! Unit tests for the conformance harness

use conformance::suites;
use conformance::{ConformanceHarness, HarnessConfig, TestResult};

#[test]
fn test_full_catalog_passes() {
    let mut harness = ConformanceHarness::new();
    let report = harness.run_all().unwrap();
    assert!(report.is_success(), "{}", report.detailed_summary());
    assert_eq!(report.total, suites::all_cases().len());
    assert_eq!(harness.test_count(), report.total);
}

#[test]
fn test_pending_cases_are_skipped() {
    let mut harness = ConformanceHarness::new();
    let report = harness.run_all().unwrap();
    let pending = suites::all_cases()
        .iter()
        .filter(|c| c.metadata.is_pending())
        .count();
    assert!(pending > 0);
    assert_eq!(report.skipped, pending);
    assert!(report
        .skips()
        .iter()
        .all(|(_, outcome)| outcome.pending.is_some()));
}

#[test]
fn test_include_pending_runs_everything() {
    let config = HarnessConfig {
        include_pending: true,
        ..Default::default()
    };
    let mut harness = ConformanceHarness::with_config(config);
    let report = harness.run_all().unwrap();
    assert_eq!(report.skipped, 0);
    assert!(report.is_success(), "{}", report.detailed_summary());
}

#[test]
fn test_suite_selection() {
    let config = HarnessConfig {
        suites: vec!["visibility".to_string()],
        ..Default::default()
    };
    let mut harness = ConformanceHarness::with_config(config);
    let report = harness.run_all().unwrap();
    assert_eq!(report.total, suites::cases_for("visibility").unwrap().len());
    assert!(harness.results().keys().all(|id| id.starts_with("visibility::")));
}

#[test]
fn test_filter_selection() {
    let config = HarnessConfig {
        filter: Some("returning factory".to_string()),
        ..Default::default()
    };
    let mut harness = ConformanceHarness::with_config(config);
    harness.run_all().unwrap();
    assert!(harness.test_count() > 0);
    assert!(harness.results().keys().all(|id| id.contains("returning factory")));
}

#[test]
fn test_unknown_suite_rejected() {
    let config = HarnessConfig {
        suites: vec!["hoisting".to_string()],
        ..Default::default()
    };
    assert!(ConformanceHarness::with_config(config).run_all().is_err());
}

#[test]
fn test_negative_cases_pass() {
    let mut harness = ConformanceHarness::new();
    for case in suites::all_cases().iter().filter(|c| c.metadata.is_negative()) {
        assert_eq!(harness.run_case(case), TestResult::Pass, "{}", case.id());
    }
}

#[test]
fn test_clear_results() {
    let mut harness = ConformanceHarness::new();
    harness.run_all().unwrap();
    assert!(harness.pass_count() > 0);
    harness.clear_results();
    assert_eq!(harness.test_count(), 0);
}
