//! Configuration constants.
//!
//! Defaults and fixed markers used across the pipeline: which files count as
//! completed scans, how the export renders missing values, and the caps
//! applied in test mode.

/// File extension (without the dot) of candidate scan result files.
pub const SCAN_FILE_EXTENSION: &str = "xml";

/// Substring that only appears in a scan file nmap finished writing.
///
/// nmap writes `<finished ... exit="success"/>` inside `<runstats>` as the
/// last step of a run; interrupted or still-running scans lack it.
pub const COMPLETION_MARKER: &str = "exit=\"success\"";

/// Name of the host script whose result carries SMB OS discovery data.
pub const SMB_DISCOVERY_SCRIPT: &str = "smb-os-discovery";

/// OS match accuracy (percent) required before a guess is trusted.
pub const OS_GUESS_MIN_ACCURACY: u8 = 100;

/// Separator placed between multiple hostnames of one host.
pub const HOSTNAME_SEPARATOR: &str = " | ";

/// Literal written to the export for missing or empty values.
pub const NULL_SENTINEL: &str = "null";

/// Default field delimiter for the delimited export.
///
/// Free-text service fields routinely contain commas and the joined hostname
/// field contains pipes, so neither is usable here.
pub const DEFAULT_DELIMITER: char = '\t';

/// Default export path.
pub const DEFAULT_OUTPUT_PATH: &str = "./scan_inventory.tsv";

/// Output path that selects stdout instead of a file.
pub const STDOUT_PATH: &str = "-";

// Test mode caps
/// Maximum number of completed scan files parsed in test mode
pub const TEST_MODE_MAX_FILES: usize = 5;
/// Maximum number of up hosts carried through the pipeline in test mode
pub const TEST_MODE_MAX_HOSTS: usize = 50;
