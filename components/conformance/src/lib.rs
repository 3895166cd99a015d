//! Object Model Conformance Suite
//!
//! This crate catalogs conformance cases for object construction and
//! prototype delegation, and provides a harness that runs them against the
//! `object_model` realm.

pub mod assert;
pub mod case;
pub mod cli;
pub mod config;
pub mod harness;
pub mod report;
pub mod suites;

pub use case::{
    CaseBody, CaseError, CaseMetadata, CaseResult, CaseStatus, ConformanceCase,
    NegativeExpectation,
};
pub use config::{ConfigError, HarnessConfig};
pub use harness::{ConformanceHarness, TestResult};
pub use report::{CaseOutcome, SuiteReport, TestReport};
