//! nmap XML scan results.
//!
//! The document model mirrors the subset of the `nmaprun` schema the
//! inventory reads; [`parse_scan`] turns file content into that model.

mod model;
mod parse;

pub use model::{
    Address, Elem, HostScript, Hostname, Hostnames, Os, OsMatch, Port, PortState, Ports,
    ScanDocument, ScanHost, Script, Service, Status,
};
pub use parse::{parse_scan, parse_scan_str, read_scan_file};
