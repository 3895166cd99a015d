//! Command-line front end for the harness.

use crate::config::{ConfigError, HarnessConfig};
use crate::harness::ConformanceHarness;
use crate::report::TestReport;
use crate::suites;
use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Object model conformance runner
#[derive(Debug, Parser)]
#[command(name = "objmodel-conformance")]
#[command(about = "Run the object model conformance suite", long_about = None)]
#[command(version)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Run only this suite (repeatable)
    #[arg(short, long = "suite")]
    pub suites: Vec<String>,

    /// Run only cases whose id contains this text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Run pending cases instead of skipping them
    #[arg(long)]
    pub include_pending: bool,

    /// Stop after the first failure
    #[arg(long)]
    pub fail_fast: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// List case ids and exit
    #[arg(long)]
    pub list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Report could not be serialized
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

impl Cli {
    /// Merge the optional config file with the command-line flags.
    ///
    /// Flags only ever widen or override what the file says.
    pub fn harness_config(&self) -> CliResult<HarnessConfig> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::default(),
        };
        if !self.suites.is_empty() {
            config.suites = self.suites.clone();
        }
        if self.filter.is_some() {
            config.filter = self.filter.clone();
        }
        config.include_pending |= self.include_pending;
        config.fail_fast |= self.fail_fast;
        config.validate()?;
        Ok(config)
    }
}

/// Install the tracing subscriber; `RUST_LOG` wins over `--verbose`
pub fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    // Ignore a subscriber that is already installed
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .try_init();
}

/// Ids of every case the configuration selects
pub fn list_cases(config: &HarnessConfig) -> Vec<String> {
    suites::all_cases()
        .iter()
        .filter(|c| config.selects_suite(&c.metadata.suite))
        .map(|c| c.id())
        .filter(|id| config.selects_id(id))
        .collect()
}

/// Run the harness and render its report
pub fn run(cli: &Cli) -> CliResult<(TestReport, String)> {
    let config = cli.harness_config()?;
    let mut harness = ConformanceHarness::with_config(config);
    let report = harness.run_all()?;
    let rendered = if cli.json {
        report.to_json()?
    } else {
        report.detailed_summary()
    };
    Ok((report, rendered))
}
