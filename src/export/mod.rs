//! Export of flattened inventory rows.
//!
//! This module writes rows to a file (or stdout) in one of two formats:
//! delimited text with the fixed inventory columns, or JSONL with every
//! flattened field.

mod delimited;
mod jsonl;
mod sink;

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::ExportFormat;
use crate::flatten::FlatServiceRow;

pub use delimited::{column_value, write_delimited, EXPORT_COLUMNS};
pub use jsonl::write_jsonl;

/// Writes `rows` to `path` in the requested format.
///
/// The destination is only created here, so callers that bail out earlier
/// leave no output behind.
///
/// # Returns
///
/// Returns the number of records exported, or an error if export fails.
pub fn export_rows(
    path: &Path,
    format: ExportFormat,
    delimiter: char,
    rows: &[FlatServiceRow],
) -> Result<usize> {
    // Library callers may skip validate_config.
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("Delimiter {:?} is not a single ASCII character", delimiter))?;

    let out = sink::open_output(path)?;
    match format {
        ExportFormat::Delimited => write_delimited(out, delimiter, rows),
        ExportFormat::Jsonl => write_jsonl(out, rows),
    }
    .with_context(|| format!("Failed to export rows to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_rows_creates_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("out.tsv");
        let n = export_rows(&path, ExportFormat::Delimited, '\t', &[]).expect("export");
        assert_eq!(n, 0);
        let content = std::fs::read_to_string(&path).expect("read back");
        assert!(content.starts_with("ip\thost\t"));
    }

    #[test]
    fn test_export_rows_rejects_non_ascii_delimiter() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("out.tsv");
        assert!(export_rows(&path, ExportFormat::Delimited, '§', &[]).is_err());
        assert!(!path.exists());
    }
}
