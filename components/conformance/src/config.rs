//! Harness configuration.
//!
//! Defaults can be overridden by a YAML file, which the CLI flags override
//! in turn.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was attempted
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The config file is not valid YAML for [`HarnessConfig`]
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that was attempted
        path: String,
        /// Underlying YAML error
        source: serde_yaml::Error,
    },
    /// A requested suite does not exist
    #[error("unknown suite: {0}")]
    UnknownSuite(String),
}

/// Which cases to run and how
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Suites to run; empty means all
    pub suites: Vec<String>,
    /// Only run cases whose id contains this substring
    pub filter: Option<String>,
    /// Run pending cases instead of skipping them
    pub include_pending: bool,
    /// Stop after the first failure
    pub fail_fast: bool,
}

impl HarnessConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_yaml(&text, &display)
    }

    /// Check that every requested suite exists
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .suites
            .iter()
            .find(|s| !crate::suites::SUITE_NAMES.contains(&s.as_str()))
        {
            Some(unknown) => Err(ConfigError::UnknownSuite(unknown.clone())),
            None => Ok(()),
        }
    }

    /// Returns true if `suite` is selected
    pub fn selects_suite(&self, suite: &str) -> bool {
        self.suites.is_empty() || self.suites.iter().any(|s| s == suite)
    }

    /// Returns true if a case id passes the filter
    pub fn selects_id(&self, id: &str) -> bool {
        self.filter
            .as_ref()
            .map(|f| id.contains(f.as_str()))
            .unwrap_or(true)
    }
}
