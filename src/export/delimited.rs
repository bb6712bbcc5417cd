//! Delimited text export.
//!
//! One line per (host, service) with the fixed inventory columns. Missing
//! values are written as the `null` sentinel so every line has every column.

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

use crate::config::NULL_SENTINEL;
use crate::flatten::FlatServiceRow;

/// Columns of the delimited export, in order.
pub const EXPORT_COLUMNS: [&str; 10] = [
    "ip",
    "host",
    "device_type",
    "os_flavor",
    "port",
    "name",
    "product",
    "version",
    "extrainfo",
    "method",
];

/// Export value for one column; absent and empty values become `null`.
pub fn column_value<'a>(row: &'a FlatServiceRow, column: &str) -> &'a str {
    row.get(column)
        .filter(|v| !v.is_empty())
        .unwrap_or(NULL_SENTINEL)
}

/// Writes the header and one record per row.
///
/// Fields are quoted only when they contain the delimiter, a quote or a
/// line break.
///
/// # Returns
///
/// Returns the number of records written (header excluded).
pub fn write_delimited<W: Write>(
    out: W,
    delimiter: u8,
    rows: &[FlatServiceRow],
) -> Result<usize> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(out);

    writer
        .write_record(EXPORT_COLUMNS)
        .context("Failed to write export header")?;

    let mut record_count = 0;
    for row in rows {
        writer
            .write_record(EXPORT_COLUMNS.iter().map(|c| column_value(row, c)))
            .context("Failed to write export record")?;
        record_count += 1;
    }

    writer.flush().context("Failed to flush export")?;
    Ok(record_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten_host;
    use crate::record::{HostRecord, Protocol, ServiceRecord};

    fn rows() -> Vec<FlatServiceRow> {
        let mut host = HostRecord::new("10.0.0.1");
        host.host = "web01 | web01.corp.local".into();
        let mut http = ServiceRecord::new(80, Protocol::Tcp);
        http.name = Some("http".into());
        http.product = Some("Apache httpd".into());
        host.services.push(http);
        flatten_host(&host)
    }

    fn write(delimiter: u8, rows: &[FlatServiceRow]) -> String {
        let mut buf = Vec::new();
        let n = write_delimited(&mut buf, delimiter, rows).expect("write");
        assert_eq!(n, rows.len());
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_header_and_null_sentinel() {
        let out = write(b'\t', &rows());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "ip\thost\tdevice_type\tos_flavor\tport\tname\tproduct\tversion\textrainfo\tmethod"
        );
        assert_eq!(
            lines[1],
            "10.0.0.1\tweb01 | web01.corp.local\tnull\tnull\t80\thttp\tapache httpd\tnull\tnull\t-1"
        );
    }

    #[test]
    fn test_quotes_only_when_needed() {
        let out = write(b'|', &rows());
        let data = out.lines().nth(1).expect("data line");
        assert!(data.starts_with("10.0.0.1|\"web01 | web01.corp.local\"|null|"));
    }

    #[test]
    fn test_no_rows_writes_header_only() {
        let out = write(b';', &[]);
        assert_eq!(out.lines().count(), 1);
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_record_write_failure_names_the_record() {
        // Enough rows to overflow the writer's internal buffer mid-loop.
        let many: Vec<FlatServiceRow> = (0..2000).flat_map(|_| rows()).collect();
        let err = write_delimited(ClosedSink, b'\t', &many).expect_err("sink refuses writes");
        let chain = format!("{:#}", err);
        assert!(chain.contains("Failed to write export record"), "{chain}");
        assert!(chain.contains("disk full"), "{chain}");
    }
}
