//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `scan_inventory` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use scan_inventory::config::{Opt, STDOUT_PATH};
use scan_inventory::initialization::init_logger_with;
use scan_inventory::{run_inventory, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::from(Opt::parse());

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_inventory(config) {
        Ok(report) => {
            // Keep stdout clean when the rows themselves went there
            if report.output.as_os_str() != STDOUT_PATH {
                println!(
                    "Classified {} of {} host{} ({:.1}%), wrote {} row{} in {:.1}s",
                    report.classified,
                    report.hosts,
                    if report.hosts == 1 { "" } else { "s" },
                    report.summary.fraction() * 100.0,
                    report.rows,
                    if report.rows == 1 { "" } else { "s" },
                    report.elapsed_seconds
                );
                println!("Results saved in {}", report.output.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("scan_inventory error: {:#}", e);
            process::exit(1);
        }
    }
}
