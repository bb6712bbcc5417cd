//! JSONL export functionality.
//!
//! Each line is one flattened row as a JSON object carrying every key the
//! row has, not only the delimited export columns. Absent values are simply
//! missing keys. This format is handy for piping to `jq`.

use anyhow::{Context, Result};
use std::io::Write;

use crate::flatten::FlatServiceRow;

/// Writes one JSON object per line.
///
/// # Returns
///
/// Returns the number of records written.
pub fn write_jsonl<W: Write>(mut out: W, rows: &[FlatServiceRow]) -> Result<usize> {
    let mut record_count = 0;
    for row in rows {
        serde_json::to_writer(&mut out, row).context("Failed to serialize row")?;
        out.write_all(b"\n")?;
        record_count += 1;
    }
    out.flush().context("Failed to flush export")?;
    Ok(record_count)
}
