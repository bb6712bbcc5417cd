//! Inventory run orchestration.
//!
//! Stages run strictly in order: validate, discover, parse, extract,
//! classify, flatten, export. Nothing is written until every exhaustion
//! check has passed.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

use crate::app::{
    print_classification_summary, print_error_statistics, print_simple_summary,
    ClassificationSummary,
};
use crate::classify::classify_all;
use crate::config::{validate_config, Config, TEST_MODE_MAX_FILES, TEST_MODE_MAX_HOSTS};
use crate::discovery::{discover_scan_files, load_completed_scans, ScanFile};
use crate::error_handling::{ErrorType, InfoType, InventoryError, ProcessingStats, WarningType};
use crate::export::export_rows;
use crate::extract::extract_host;
use crate::flatten::flatten_all;
use crate::nmap::{parse_scan, ScanHost};
use crate::record::HostRecord;

/// Results of an inventory run.
#[derive(Debug, Clone)]
pub struct InventoryReport {
    /// Hosts that were extracted and classified
    pub hosts: usize,
    /// Hosts a classification rule fired for
    pub classified: usize,
    /// Rows written to the output
    pub rows: usize,
    /// Where the rows went (`-` for stdout)
    pub output: PathBuf,
    /// Per-method breakdown
    pub summary: ClassificationSummary,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs an inventory over every completed scan under the configured
/// directories and writes one row per (host, service).
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid (`ConfigError`)
/// - An input directory cannot be read
/// - No completed scan was found, or completed scans hold no up host
///   (`InventoryError`); no output is created in either case
/// - The output cannot be written
///
/// # Example
///
/// ```no_run
/// use scan_inventory::{run_inventory, Config};
/// use std::path::PathBuf;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config {
///     input_dirs: vec![PathBuf::from("./scans")],
///     output: PathBuf::from("inventory.tsv"),
///     ..Default::default()
/// };
/// let report = run_inventory(config)?;
/// println!("{} of {} hosts classified", report.classified, report.hosts);
/// # Ok(())
/// # }
/// ```
pub fn run_inventory(config: Config) -> Result<InventoryReport> {
    let start_time = Instant::now();
    validate_config(&config).context("Invalid configuration")?;
    let stats = ProcessingStats::new();

    let candidates =
        discover_scan_files(&config.input_dirs).context("Failed to search input directories")?;
    info!(
        "Found {} candidate scan file{}",
        candidates.len(),
        if candidates.len() == 1 { "" } else { "s" }
    );

    let mut scans = load_completed_scans(&candidates, &stats);
    if scans.is_empty() {
        return Err(InventoryError::NoCompletedScans {
            searched: config.input_dirs.len(),
        }
        .into());
    }
    if config.test_mode && scans.len() > TEST_MODE_MAX_FILES {
        info!(
            "Test mode: processing {} of {} completed scans",
            TEST_MODE_MAX_FILES,
            scans.len()
        );
        stats.add_warning(WarningType::TestModeFileCap, scans.len() - TEST_MODE_MAX_FILES);
        scans.truncate(TEST_MODE_MAX_FILES);
    }

    let (mut up_hosts, parsed_files) = collect_up_hosts(&scans, &stats);
    if config.test_mode && up_hosts.len() > TEST_MODE_MAX_HOSTS {
        stats.add_warning(
            WarningType::TestModeHostCap,
            up_hosts.len() - TEST_MODE_MAX_HOSTS,
        );
        up_hosts.truncate(TEST_MODE_MAX_HOSTS);
    }
    if up_hosts.is_empty() {
        return Err(InventoryError::NoUpHosts {
            files: parsed_files,
        }
        .into());
    }
    info!(
        "{} up host{} in {} scan file{}",
        up_hosts.len(),
        if up_hosts.len() == 1 { "" } else { "s" },
        parsed_files,
        if parsed_files == 1 { "" } else { "s" }
    );

    let mut records = extract_records(&up_hosts, &stats);
    classify_all(&mut records);
    let summary = ClassificationSummary::from_hosts(&records);

    let rows = flatten_all(&records);
    let written = export_rows(&config.output, config.format, config.delimiter, &rows)?;
    stats.add_info(InfoType::RowExported, written);

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    print_error_statistics(&stats);
    print_classification_summary(&summary);
    print_simple_summary(records.len(), written, elapsed_seconds);

    Ok(InventoryReport {
        hosts: records.len(),
        classified: summary.classified,
        rows: written,
        output: config.output,
        summary,
        elapsed_seconds,
    })
}

/// Parses every completed scan and keeps the hosts nmap reported up.
///
/// Returns the up hosts in file then document order, plus the number of
/// files that parsed.
fn collect_up_hosts(scans: &[ScanFile], stats: &ProcessingStats) -> (Vec<ScanHost>, usize) {
    let mut up_hosts = Vec::new();
    let mut parsed_files = 0;
    for scan in scans {
        let document = match parse_scan(&scan.path, &scan.content) {
            Ok(document) => document,
            Err(e) => {
                warn!("{}", e);
                stats.increment_error(ErrorType::ScanParseError);
                continue;
            }
        };
        parsed_files += 1;
        debug!(
            "{}: {} host entr{}",
            scan.path.display(),
            document.hosts.len(),
            if document.hosts.len() == 1 { "y" } else { "ies" }
        );
        for host in document.hosts {
            if host.is_up() {
                stats.increment_info(InfoType::HostUp);
                up_hosts.push(host);
            } else {
                stats.increment_info(InfoType::HostDown);
            }
        }
    }
    (up_hosts, parsed_files)
}

fn extract_records(hosts: &[ScanHost], stats: &ProcessingStats) -> Vec<HostRecord> {
    hosts
        .iter()
        .filter_map(|host| match extract_host(host) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Discarding host: {}", e);
                stats.increment_error(ErrorType::MissingAddressError);
                None
            }
        })
        .collect()
}
