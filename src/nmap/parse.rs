//! Reading scan result files into the document model.

use std::path::Path;

use crate::error_handling::ParseError;
use crate::nmap::model::ScanDocument;

/// Parses nmap XML text.
pub fn parse_scan_str(xml: &str) -> Result<ScanDocument, quick_xml::DeError> {
    quick_xml::de::from_str(xml)
}

/// Reads one scan result file into memory.
///
/// # Errors
///
/// Returns `ParseError::Read` if the file cannot be read as UTF-8 text.
pub fn read_scan_file(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses the content of the scan file at `path`.
///
/// # Errors
///
/// Returns `ParseError::Xml` if the content is not a well-formed nmap
/// document.
pub fn parse_scan(path: &Path, xml: &str) -> Result<ScanDocument, ParseError> {
    parse_scan_str(xml).map_err(|source| ParseError::Xml {
        path: path.to_path_buf(),
        source,
    })
}
