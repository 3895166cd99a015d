use crate::case::{CaseError, ConformanceCase};
use crate::config::{ConfigError, HarnessConfig};
use crate::report::TestReport;
use crate::suites;
use object_model::Realm;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Result of running a single case
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum TestResult {
    /// Case passed
    Pass,
    /// Case failed with reason
    Fail(String),
    /// Case was skipped with reason
    Skip(String),
}

impl TestResult {
    /// Check if the result is a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass)
    }

    /// Check if the result is a failure
    pub fn is_fail(&self) -> bool {
        matches!(self, TestResult::Fail(_))
    }

    /// Check if the result is a skip
    pub fn is_skip(&self) -> bool {
        matches!(self, TestResult::Skip(_))
    }
}

/// Object model conformance harness
pub struct ConformanceHarness {
    config: HarnessConfig,
    /// Results of executed cases, keyed by case id
    results: BTreeMap<String, TestResult>,
}

impl ConformanceHarness {
    /// Create a harness with the default configuration
    pub fn new() -> Self {
        Self::with_config(HarnessConfig::default())
    }

    /// Create a harness with a custom configuration
    pub fn with_config(config: HarnessConfig) -> Self {
        Self {
            config,
            results: BTreeMap::new(),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run pending cases instead of skipping them
    pub fn set_include_pending(&mut self, include: bool) {
        self.config.include_pending = include;
    }

    /// Run a single case in a fresh realm
    pub fn run_case(&mut self, case: &ConformanceCase) -> TestResult {
        let id = case.id();
        let pending = case.metadata.pending_reason().filter(|_| !self.config.include_pending);
        let result = if let Some(reason) = pending {
            TestResult::Skip(format!("Pending: {}", reason))
        } else {
            let mut realm = Realm::new();
            let outcome = (case.body)(&mut realm);
            evaluate(case, outcome)
        };

        match &result {
            TestResult::Pass => debug!(case = %id, "pass"),
            TestResult::Fail(reason) => warn!(case = %id, %reason, "fail"),
            TestResult::Skip(reason) => debug!(case = %id, %reason, "skip"),
        }
        self.results.insert(id, result.clone());
        result
    }

    /// Run every selected case, in suite order
    pub fn run_all(&mut self) -> Result<TestReport, ConfigError> {
        self.config.validate()?;
        let mut report = TestReport::new();

        for suite in suites::SUITE_NAMES {
            if !self.config.selects_suite(suite) {
                continue;
            }
            let Some(cases) = suites::cases_for(suite) else {
                continue;
            };
            info!(suite, cases = cases.len(), "running suite");

            for case in &cases {
                if !self.config.selects_id(&case.id()) {
                    continue;
                }
                let result = self.run_case(case);
                let failed = result.is_fail();
                report.record(&case.metadata, result);
                if failed && self.config.fail_fast {
                    info!("stopping after first failure");
                    return Ok(report);
                }
            }
        }

        info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            "run complete"
        );
        Ok(report)
    }

    /// Get all results
    pub fn results(&self) -> &BTreeMap<String, TestResult> {
        &self.results
    }

    /// Clear all results
    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    /// Get number of cases run
    pub fn test_count(&self) -> usize {
        self.results.len()
    }

    /// Get number of passing cases
    pub fn pass_count(&self) -> usize {
        self.results.values().filter(|r| r.is_pass()).count()
    }

    /// Get number of failing cases
    pub fn fail_count(&self) -> usize {
        self.results.values().filter(|r| r.is_fail()).count()
    }

    /// Get number of skipped cases
    pub fn skip_count(&self) -> usize {
        self.results.values().filter(|r| r.is_skip()).count()
    }
}

impl Default for ConformanceHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare a body's outcome with the case's expectation
fn evaluate(case: &ConformanceCase, outcome: Result<(), CaseError>) -> TestResult {
    match (&case.metadata.negative, outcome) {
        (None, Ok(())) => TestResult::Pass,
        (None, Err(err)) => TestResult::Fail(err.to_string()),
        (Some(expected), Ok(())) => TestResult::Fail(format!(
            "Expected {} but completed normally",
            expected.kind
        )),
        (Some(expected), Err(CaseError::Js(err))) => {
            if expected.matches(&err) {
                TestResult::Pass
            } else {
                TestResult::Fail(format!(
                    "Expected {}{} but got: {}",
                    expected.kind,
                    expected
                        .message
                        .as_ref()
                        .map(|m| format!(" ({:?})", m))
                        .unwrap_or_default(),
                    err
                ))
            }
        }
        (Some(_), Err(err @ CaseError::Assertion(_))) => TestResult::Fail(err.to_string()),
    }
}
