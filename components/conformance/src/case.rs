use core_types::{ErrorKind, JsError};
use object_model::Realm;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a case body stopped early
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaseError {
    /// The realm raised an error
    #[error(transparent)]
    Js(#[from] JsError),
    /// An assertion did not hold
    #[error("assertion failed: {0}")]
    Assertion(String),
}

/// Result type for case bodies and assertion helpers
pub type CaseResult<T = ()> = Result<T, CaseError>;

/// Setup steps plus assertions, run against a fresh realm
pub type CaseBody = fn(&mut Realm) -> CaseResult;

/// Expected failure of a negative case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NegativeExpectation {
    /// Error kind expected (e.g., `TypeError`, `ReferenceError`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Exact message expected, if the case pins it
    pub message: Option<String>,
}

impl NegativeExpectation {
    /// Expect an error of `kind` with any message
    pub fn kind(kind: ErrorKind) -> Self {
        Self {
            kind: kind.name().to_string(),
            message: None,
        }
    }

    /// Expect an error of `kind` with exactly `message`
    pub fn exact(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind: kind.name().to_string(),
            message: Some(message.into()),
        }
    }

    /// Returns true if `error` satisfies this expectation
    pub fn matches(&self, error: &JsError) -> bool {
        error.kind.name() == self.kind
            && self
                .message
                .as_ref()
                .map(|m| *m == error.message)
                .unwrap_or(true)
    }
}

/// Whether a case runs by default
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaseStatus {
    /// Runs in every harness configuration
    Active,
    /// Skipped unless pending cases are requested
    Pending(String),
}

/// Descriptive data about a case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseMetadata {
    /// Suite the case belongs to
    pub suite: String,
    /// Human-readable case name
    pub name: String,
    /// What the case verifies
    pub description: Option<String>,
    /// Expected error for negative cases
    pub negative: Option<NegativeExpectation>,
    /// Active or pending
    pub status: CaseStatus,
}

impl CaseMetadata {
    /// Check if the case expects its body to fail
    pub fn is_negative(&self) -> bool {
        self.negative.is_some()
    }

    /// Check if the case is pending
    pub fn is_pending(&self) -> bool {
        matches!(self.status, CaseStatus::Pending(_))
    }

    /// Fully qualified id, `suite::name`
    pub fn id(&self) -> String {
        format!("{}::{}", self.suite, self.name)
    }

    /// Reason the case is pending, if it is
    pub fn pending_reason(&self) -> Option<&str> {
        match &self.status {
            CaseStatus::Pending(reason) => Some(reason),
            CaseStatus::Active => None,
        }
    }
}

/// One conformance case
#[derive(Debug, Clone)]
pub struct ConformanceCase {
    /// Descriptive data
    pub metadata: CaseMetadata,
    /// The scenario
    pub body: CaseBody,
}

impl ConformanceCase {
    /// Create an active, positive case
    pub fn new(suite: &str, name: &str, body: CaseBody) -> Self {
        Self {
            metadata: CaseMetadata {
                suite: suite.to_string(),
                name: name.to_string(),
                description: None,
                negative: None,
                status: CaseStatus::Active,
            },
            body,
        }
    }

    /// Attach a description
    pub fn describe(mut self, description: &str) -> Self {
        self.metadata.description = Some(description.to_string());
        self
    }

    /// Expect the body to fail with the given error
    pub fn expect_error(mut self, negative: NegativeExpectation) -> Self {
        self.metadata.negative = Some(negative);
        self
    }

    /// Mark the case pending with a reason
    pub fn pending(mut self, reason: &str) -> Self {
        self.metadata.status = CaseStatus::Pending(reason.to_string());
        self
    }

    /// Fully qualified id, `suite::name`
    pub fn id(&self) -> String {
        self.metadata.id()
    }
}
