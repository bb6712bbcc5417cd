//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Fatal configuration problems, reported before any processing begins.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No input directory was supplied.
    #[error("No input directories given; pass at least one directory containing scan results")]
    NoInputDirectories,

    /// A supplied input path does not exist.
    #[error("Input directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A supplied input path exists but is not a directory.
    #[error("Input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The export delimiter could collide with field content.
    #[error("Invalid delimiter {0:?}: use a single ASCII character other than a comma")]
    InvalidDelimiter(char),
}

/// "Nothing to report" conditions that abort the whole run.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// No candidate file carried the completion marker.
    #[error("No completed scans found under {searched} input {}", directory_noun(.searched))]
    NoCompletedScans {
        /// Number of input directories searched
        searched: usize,
    },

    /// Every completed scan parsed to zero up hosts.
    #[error("Completed scans contained no up hosts ({files} {} parsed)", file_noun(.files))]
    NoUpHosts {
        /// Number of scan files successfully parsed
        files: usize,
    },
}

fn directory_noun(count: &usize) -> &'static str {
    if *count == 1 {
        "directory"
    } else {
        "directories"
    }
}

fn file_noun(count: &usize) -> &'static str {
    if *count == 1 {
        "file"
    } else {
        "files"
    }
}

/// Per-host extraction failures. The host is discarded, the run continues.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// The scan host carries no IPv4 address.
    #[error("Host has no IPv4 address")]
    MissingAddress,
}

/// Per-file failures while reading or parsing a scan result.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The file could not be read.
    #[error("Failed to read scan file {}: {source}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a well-formed nmap XML document.
    #[error("Failed to parse scan file {}: {source}", .path.display())]
    Xml {
        /// File that failed
        path: PathBuf,
        /// Underlying deserialization error
        #[source]
        source: quick_xml::DeError,
    },
}

/// Types of errors that can occur while processing scan files and hosts.
///
/// Each of these drops one item (a file or a host) but never the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum ErrorType {
    ScanReadError,
    ScanParseError,
    MissingAddressError,
}

/// Types of warnings that can occur during processing.
///
/// Warnings mark input that was deliberately left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    IncompleteScanSkipped, // File lacks the completion marker
    TestModeFileCap,       // Completed file dropped by the test-mode cap
    TestModeHostCap,       // Up host dropped by the test-mode cap
}

/// Types of informational metrics tracked during processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    ScanFileFound,
    CompletedScan,
    HostUp,
    HostDown,
    RowExported,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ScanReadError => "Scan file read error",
            ErrorType::ScanParseError => "Scan file parse error",
            ErrorType::MissingAddressError => "Host without IPv4 address",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::IncompleteScanSkipped => "Incomplete scan skipped",
            WarningType::TestModeFileCap => "Scan file skipped (test mode)",
            WarningType::TestModeHostCap => "Host skipped (test mode)",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::ScanFileFound => "Candidate scan files",
            InfoType::CompletedScan => "Completed scans",
            InfoType::HostUp => "Up hosts",
            InfoType::HostDown => "Down hosts",
            InfoType::RowExported => "Rows exported",
        }
    }
}
