// Shared test helpers for building scan fixtures.
//
// This module provides small nmap XML builders and a TempDir-backed scan tree
// used across the integration tests.

#![allow(dead_code)] // Each test file uses a different subset

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// One `<port>` element.
pub fn port(protocol: &str, portid: u16, state: &str, service_attrs: &str) -> String {
    let service = if service_attrs.is_empty() {
        String::new()
    } else {
        format!("<service {service_attrs}/>")
    };
    format!(
        r#"<port protocol="{protocol}" portid="{portid}"><state state="{state}" reason="syn-ack"/>{service}</port>"#
    )
}

/// One `<host>` element with the given status, address and extra children.
pub fn host(state: &str, ip: &str, children: &str) -> String {
    format!(
        r#"<host starttime="1" endtime="2"><status state="{state}" reason="echo-reply"/><address addr="{ip}" addrtype="ipv4"/>{children}</host>"#
    )
}

/// `<hostnames>` with the given names in order.
pub fn hostnames(names: &[&str]) -> String {
    let inner: String = names
        .iter()
        .map(|n| format!(r#"<hostname name="{n}" type="PTR"/>"#))
        .collect();
    format!("<hostnames>{inner}</hostnames>")
}

/// `<os>` with a single match.
pub fn os_match(name: &str, accuracy: u8) -> String {
    format!(r#"<os><osmatch name="{name}" accuracy="{accuracy}" line="1"/></os>"#)
}

/// A full scan document. `completed` controls the `exit="success"` marker.
pub fn scan_document(hosts: &[String], completed: bool) -> String {
    let body: String = hosts.concat();
    let runstats = if completed {
        r#"<runstats><finished time="2" timestr="now" elapsed="1.00" exit="success"/></runstats>"#
    } else {
        ""
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<nmaprun scanner="nmap" args="nmap -sV -O" version="7.94">
<scaninfo type="syn" protocol="tcp" numservices="1000" services="1-1000"/>
{body}
<taskprogress task="Service scan" time="2" percent="100.00"/>
{runstats}
</nmaprun>
"#
    )
}

/// A temporary directory of scan files plus an output location next to it.
pub struct ScanTree {
    pub dir: TempDir,
}

impl ScanTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn scans_dir(&self) -> PathBuf {
        let path = self.dir.path().join("scans");
        fs::create_dir_all(&path).expect("Failed to create scans directory");
        path
    }

    /// Writes `content` to `scans/<relative>`, creating parent directories.
    pub fn write_scan(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.scans_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write scan file");
        path
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Reads a delimited export into header + data lines split on `delimiter`.
pub fn read_export(path: &Path, delimiter: char) -> (Vec<String>, Vec<Vec<String>>) {
    let content = fs::read_to_string(path).expect("Failed to read export");
    let mut lines = content.lines();
    let header = lines
        .next()
        .expect("export has a header")
        .split(delimiter)
        .map(str::to_string)
        .collect();
    let rows = lines
        .map(|l| l.split(delimiter).map(str::to_string).collect())
        .collect();
    (header, rows)
}
