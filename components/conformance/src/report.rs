//! Run reports, grouped by suite.
//!
//! Every executed or skipped case is kept with the expectation it was run
//! against, so a report can say not only that a negative case failed but
//! which error it was waiting for.

use crate::case::{CaseMetadata, NegativeExpectation};
use crate::harness::TestResult;
use serde::Serialize;
use std::fmt::Write;

/// One case as it appears in a report
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    /// Case name within its suite
    pub name: String,
    /// What happened
    pub result: TestResult,
    /// Error the case expected to be raised
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<NegativeExpectation>,
    /// Why the case is pending, whether or not it ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
}

/// Results for one suite, in run order
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    /// Suite name
    pub suite: String,
    /// Cases that passed
    pub passed: usize,
    /// Cases that failed
    pub failed: usize,
    /// Cases that were skipped
    pub skipped: usize,
    /// Every recorded case
    pub cases: Vec<CaseOutcome>,
}

impl SuiteReport {
    fn new(suite: &str) -> Self {
        SuiteReport {
            suite: suite.to_string(),
            ..Default::default()
        }
    }

    /// Number of recorded cases
    pub fn total(&self) -> usize {
        self.cases.len()
    }

    /// Fully qualified id of a case in this suite
    pub fn case_id(&self, outcome: &CaseOutcome) -> String {
        format!("{}::{}", self.suite, outcome.name)
    }
}

/// Report for a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestReport {
    /// Total number of cases recorded
    pub total: usize,
    /// Number of cases that passed
    pub passed: usize,
    /// Number of cases that failed
    pub failed: usize,
    /// Number of cases that were skipped
    pub skipped: usize,
    /// Per-suite breakdown, in run order
    pub suites: Vec<SuiteReport>,
}

impl TestReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of one case under its suite
    pub fn record(&mut self, case: &CaseMetadata, result: TestResult) {
        let index = match self.suites.iter().position(|s| s.suite == case.suite) {
            Some(index) => index,
            None => {
                self.suites.push(SuiteReport::new(&case.suite));
                self.suites.len() - 1
            }
        };
        let suite = &mut self.suites[index];

        self.total += 1;
        match result {
            TestResult::Pass => {
                self.passed += 1;
                suite.passed += 1;
            }
            TestResult::Fail(_) => {
                self.failed += 1;
                suite.failed += 1;
            }
            TestResult::Skip(_) => {
                self.skipped += 1;
                suite.skipped += 1;
            }
        }
        suite.cases.push(CaseOutcome {
            name: case.name.clone(),
            result,
            negative: case.negative.clone(),
            pending: case.pending_reason().map(str::to_string),
        });
    }

    /// Breakdown for one suite
    pub fn suite(&self, name: &str) -> Option<&SuiteReport> {
        self.suites.iter().find(|s| s.suite == name)
    }

    /// Ids and outcomes of every failed case
    pub fn failures(&self) -> Vec<(String, &CaseOutcome)> {
        self.select(TestResult::is_fail)
    }

    /// Ids and outcomes of every skipped case
    pub fn skips(&self) -> Vec<(String, &CaseOutcome)> {
        self.select(TestResult::is_skip)
    }

    fn select(&self, keep: fn(&TestResult) -> bool) -> Vec<(String, &CaseOutcome)> {
        self.suites
            .iter()
            .flat_map(|suite| {
                suite
                    .cases
                    .iter()
                    .filter(move |c| keep(&c.result))
                    .map(move |c| (suite.case_id(c), c))
            })
            .collect()
    }

    /// Passed cases as a percentage of all recorded cases
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Passed cases as a percentage of the cases that actually ran
    pub fn effective_pass_rate(&self) -> f64 {
        let executed = self.total - self.skipped;
        if executed == 0 {
            0.0
        } else {
            (self.passed as f64 / executed as f64) * 100.0
        }
    }

    /// One-paragraph totals
    pub fn summary(&self) -> String {
        format!(
            "Conformance Results:\n\
             Total: {}\n\
             Passed: {} ({:.1}%)\n\
             Failed: {}\n\
             Skipped: {}\n\
             Effective Pass Rate: {:.1}%",
            self.total,
            self.passed,
            self.pass_rate(),
            self.failed,
            self.skipped,
            self.effective_pass_rate()
        )
    }

    /// Totals, then one block per suite listing failures and skips
    pub fn detailed_summary(&self) -> String {
        let mut output = self.summary();

        for suite in &self.suites {
            let _ = write!(
                output,
                "\n\n[{}] {} cases: {} passed, {} failed, {} skipped",
                suite.suite,
                suite.total(),
                suite.passed,
                suite.failed,
                suite.skipped
            );
            for case in &suite.cases {
                match &case.result {
                    TestResult::Pass => {}
                    TestResult::Fail(reason) => {
                        let _ = write!(output, "\n  FAIL {}\n    Reason: {}", case.name, reason);
                        if let Some(negative) = &case.negative {
                            let _ = write!(output, "\n    Expected: {}", describe_negative(negative));
                        }
                    }
                    TestResult::Skip(reason) => {
                        let _ = write!(output, "\n  SKIP {} ({})", case.name, reason);
                    }
                }
            }
        }

        output
    }

    /// Check if no case failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Export report as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn describe_negative(negative: &NegativeExpectation) -> String {
    match &negative.message {
        Some(message) => format!("{}: {}", negative.kind, message),
        None => negative.kind.clone(),
    }
}
