//! Object Model Conformance Runner
//!
//! Runs the conformance catalog and prints a report. Exits with 1 when any
//! case fails and 2 when the configuration is unusable.

use clap::Parser;
use conformance::cli::{self, Cli};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    if cli.list {
        return match cli.harness_config() {
            Ok(config) => {
                for id in cli::list_cases(&config) {
                    println!("{}", id);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        };
    }

    let start = Instant::now();
    match cli::run(&cli) {
        Ok((report, rendered)) => {
            println!("{}", rendered);
            if !cli.json {
                println!("Duration: {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);
            }
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
