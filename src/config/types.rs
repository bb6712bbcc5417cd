//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_DELIMITER, DEFAULT_OUTPUT_PATH};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Export file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Delimited text with the fixed inventory columns
    Delimited,
    /// One JSON object per row, carrying every flattened field
    Jsonl,
}

/// Command-line options.
///
/// Converted into a [`Config`] before anything runs, so the library never
/// depends on clap types.
///
/// # Examples
///
/// ```bash
/// # Inventory every completed scan under two directories
/// scan_inventory ./scans/site-a ./scans/site-b
///
/// # Quick pass over a handful of files with debug logging
/// scan_inventory ./scans --test-mode --log-level debug
///
/// # JSONL to stdout, filtered with jq
/// scan_inventory ./scans --format jsonl --output - | jq 'select(.method == "-1")'
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "scan_inventory",
    about = "Classifies hosts found in completed nmap XML scans and exports one row per service."
)]
pub struct Opt {
    /// Directories searched recursively for scan result files
    #[arg(value_parser)]
    pub input_dirs: Vec<PathBuf>,

    /// Output file path (`-` writes to stdout)
    #[arg(short, long, value_parser, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Output format: delimited|jsonl
    #[arg(long, value_enum, default_value_t = ExportFormat::Delimited)]
    pub format: ExportFormat,

    /// Field delimiter for the delimited format (any single ASCII character except a comma)
    #[arg(long, default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Only process a few files and hosts, for quick iteration
    #[arg(long)]
    pub test_mode: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use scan_inventory::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input_dirs: vec![PathBuf::from("./scans")],
///     test_mode: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directories searched recursively for scan result files
    pub input_dirs: Vec<PathBuf>,

    /// Output file path; `-` means stdout
    pub output: PathBuf,

    /// Output format
    pub format: ExportFormat,

    /// Field delimiter for the delimited format
    pub delimiter: char,

    /// Cap files and hosts for a fast run
    pub test_mode: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dirs: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: ExportFormat::Delimited,
            delimiter: DEFAULT_DELIMITER,
            test_mode: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input_dirs: opt.input_dirs,
            output: opt.output,
            format: opt.format,
            delimiter: opt.delimiter,
            test_mode: opt.test_mode,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
