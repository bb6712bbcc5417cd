//! Denormalization of classified hosts into one row per service.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::{HostRecord, ServiceRecord, SmbDiscovery};

/// One (host, service) pair as a flat, normalized key → value map.
///
/// Host-level keys (`ip`, `host`, `device_type`, `smb.os`, ...) are combined
/// with one service's keys (`port`, `protocol`, `name`, ...). Keys whose
/// value is absent are not present at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlatServiceRow(BTreeMap<String, String>);

impl FlatServiceRow {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value.map(normalize_value).filter(|v| !v.is_empty()) {
            self.0.insert(key.to_string(), value);
        }
    }
}

/// Lowercases a value and strips one pair of parentheses wrapping all of it.
///
/// `"(Ubuntu Linux)"` becomes `"ubuntu linux"`, but `"(a) (b)"` is left
/// alone because its first `(` closes before the end.
pub fn normalize_value(value: &str) -> String {
    let lower = value.trim().to_lowercase();
    match lower.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        Some(inner) if wraps_whole(&lower) => inner.trim().to_string(),
        _ => lower,
    }
}

// True when the opening paren at index 0 is closed by the final character.
fn wraps_whole(value: &str) -> bool {
    let mut depth = 0usize;
    let last = value.len().saturating_sub(1);
    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == last;
                }
            }
            _ => {}
        }
    }
    false
}

/// Host-level fields shared by every row of a host.
pub fn host_fields(host: &HostRecord) -> FlatServiceRow {
    let mut row = FlatServiceRow::default();
    row.insert("ip", Some(host.ip.as_str()));
    row.insert("host", Some(host.host.as_str()));
    row.insert("os_guess", host.os_guess.as_deref());
    row.insert("device_type", host.device_type());
    row.insert("os_flavor", host.os_flavor());
    row.insert("method", Some(host.method().to_string().as_str()));

    match &host.smb {
        Some(SmbDiscovery::Fields {
            os,
            fqdn,
            forest_dns,
        }) => {
            row.insert("smb.os", os.as_deref());
            row.insert("smb.fqdn", fqdn.as_deref());
            row.insert("smb.forest_dns", forest_dns.as_deref());
        }
        Some(SmbDiscovery::Output(output)) => row.insert("smb.output", Some(output.as_str())),
        None => {}
    }
    row
}

fn merge_service(mut row: FlatServiceRow, service: &ServiceRecord) -> FlatServiceRow {
    row.insert("port", Some(service.port.to_string().as_str()));
    row.insert("protocol", Some(service.protocol.as_str()));
    row.insert("name", service.name.as_deref());
    row.insert("product", service.product.as_deref());
    row.insert("version", service.version.as_deref());
    row.insert("extrainfo", service.extrainfo.as_deref());
    row
}

/// One row per service of `host`, in service order. A host without
/// services yields no rows.
pub fn flatten_host(host: &HostRecord) -> Vec<FlatServiceRow> {
    let base = host_fields(host);
    host.services
        .iter()
        .map(|service| merge_service(base.clone(), service))
        .collect()
}

/// Flattens every host, keeping each host's rows contiguous and hosts in
/// input order.
pub fn flatten_all(hosts: &[HostRecord]) -> Vec<FlatServiceRow> {
    hosts.iter().flat_map(flatten_host).collect()
}
