//! Finding completed scan result files under the input directories.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::{COMPLETION_MARKER, SCAN_FILE_EXTENSION};
use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};
use crate::nmap::read_scan_file;

/// A scan file that finished successfully, with its content.
#[derive(Debug, Clone)]
pub struct ScanFile {
    pub path: PathBuf,
    pub content: String,
}

/// Whether a file has the scan extension, ignoring case.
pub fn is_scan_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SCAN_FILE_EXTENSION))
}

/// Whether scan output ran to completion. Interrupted scans lack the
/// `exit="success"` attribute on their `<finished>` element.
pub fn is_completed_scan(content: &str) -> bool {
    content.contains(COMPLETION_MARKER)
}

/// Recursively collects candidate scan files under every directory.
///
/// Paths are returned sorted so runs over the same tree process files in the
/// same order. Subdirectories that cannot be read are logged and skipped.
/// Symlinked directories are not descended into, and a file reachable under
/// several paths is kept once.
///
/// # Errors
///
/// Returns an I/O error if a root directory cannot be read.
pub fn discover_scan_files(dirs: &[PathBuf]) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dir in dirs {
        let entries = fs::read_dir(dir)?;
        walk(entries, &mut files);
    }
    files.sort();
    let mut seen = HashSet::new();
    files.retain(|path| seen.insert(fs::canonicalize(path).unwrap_or_else(|_| path.clone())));
    Ok(files)
}

fn walk(entries: fs::ReadDir, files: &mut Vec<PathBuf>) {
    for entry in entries.flatten() {
        let path = entry.path();
        let is_dir = match entry.file_type() {
            Ok(kind) => kind.is_dir(),
            Err(e) => {
                warn!("Failed to stat {}: {}", path.display(), e);
                continue;
            }
        };
        if is_dir {
            match fs::read_dir(&path) {
                Ok(sub) => walk(sub, files),
                Err(e) => warn!("Failed to read directory {}: {}", path.display(), e),
            }
        } else if is_scan_file(&path) {
            files.push(path);
        }
    }
}

/// Reads candidate files and keeps the completed ones.
///
/// Unreadable files are counted as errors and incomplete ones as warnings;
/// neither stops the batch.
pub fn load_completed_scans(paths: &[PathBuf], stats: &ProcessingStats) -> Vec<ScanFile> {
    let mut completed = Vec::new();
    for path in paths {
        stats.increment_info(InfoType::ScanFileFound);
        let content = match read_scan_file(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("{}", e);
                stats.increment_error(ErrorType::ScanReadError);
                continue;
            }
        };
        if !is_completed_scan(&content) {
            debug!("Skipping incomplete scan {}", path.display());
            stats.increment_warning(WarningType::IncompleteScanSkipped);
            continue;
        }
        stats.increment_info(InfoType::CompletedScan);
        completed.push(ScanFile {
            path: path.clone(),
            content,
        });
    }
    completed
}
