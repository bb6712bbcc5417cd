//! Scan host → host record extraction.

use crate::config::{HOSTNAME_SEPARATOR, OS_GUESS_MIN_ACCURACY, SMB_DISCOVERY_SCRIPT};
use crate::error_handling::ExtractError;
use crate::nmap::{Port, ScanHost, Script};
use crate::record::{HostRecord, Protocol, ServiceRecord, SmbDiscovery};

/// Builds the canonical record for one scan host.
///
/// Services are every open TCP port followed by every open UDP port, in
/// document order. Missing service attributes, hostnames, SMB data and OS
/// guesses all become `None`/empty; only a missing IPv4 address rejects the
/// host.
///
/// # Errors
///
/// Returns `ExtractError::MissingAddress` if the host has no IPv4 address.
pub fn extract_host(scan_host: &ScanHost) -> Result<HostRecord, ExtractError> {
    let ip = scan_host.ipv4().ok_or(ExtractError::MissingAddress)?;

    let mut record = HostRecord::new(ip);
    record.host = scan_host
        .hostnames()
        .collect::<Vec<_>>()
        .join(HOSTNAME_SEPARATOR);
    record.services = scan_host
        .open_ports("tcp")
        .map(|p| service_record(p, Protocol::Tcp))
        .chain(
            scan_host
                .open_ports("udp")
                .map(|p| service_record(p, Protocol::Udp)),
        )
        .collect();
    record.smb = scan_host.script(SMB_DISCOVERY_SCRIPT).and_then(smb_discovery);
    record.os_guess = scan_host
        .top_os_match()
        .filter(|m| m.accuracy == OS_GUESS_MIN_ACCURACY)
        .and_then(|m| non_empty(Some(m.name.as_str())));

    Ok(record)
}

fn service_record(port: &Port, protocol: Protocol) -> ServiceRecord {
    let mut record = ServiceRecord::new(port.portid, protocol);
    if let Some(service) = &port.service {
        record.name = non_empty(service.name.as_deref());
        record.product = non_empty(service.product.as_deref());
        record.version = non_empty(service.version.as_deref());
        record.extrainfo = non_empty(service.extrainfo.as_deref());
    }
    record
}

fn smb_discovery(script: &Script) -> Option<SmbDiscovery> {
    let field = |key: &str| non_empty(script.elem(key));
    let os = field("os");
    let fqdn = field("fqdn");
    let forest_dns = field("forest_dns");

    if os.is_some() || fqdn.is_some() || forest_dns.is_some() {
        return Some(SmbDiscovery::Fields {
            os,
            fqdn,
            forest_dns,
        });
    }

    non_empty(script.output.as_deref()).map(SmbDiscovery::Output)
}

/// Trims a value and drops it when nothing is left.
fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
