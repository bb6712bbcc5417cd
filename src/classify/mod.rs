//! Device-type and OS-flavor inference.
//!
//! Hosts are run through a fixed-priority cascade of rules (see
//! [`rules::RULES`]). Priority encodes confidence: a certain OS fingerprint
//! beats SMB discovery, which beats service banners, which beat hostname and
//! keyword heuristics. The first rule that produces a device type decides the
//! host; when none does the host stays unclassified with method `-1`.

mod products;
pub mod rules;

pub use products::{lookup, KNOWN_PRODUCTS};

use log::debug;

use crate::record::{Classification, HostRecord};

/// Runs the cascade and returns the first rule's result.
pub fn classify(host: &HostRecord) -> Option<Classification> {
    rules::RULES.iter().find_map(|(method, rule)| {
        let result = rule(host);
        if let Some(c) = &result {
            debug!(
                "{}: {} via {} (flavor: {})",
                host.ip,
                c.device_type(),
                method.as_str(),
                c.os_flavor().unwrap_or("-")
            );
        }
        result
    })
}

/// Classifies one host in place.
pub fn classify_host(host: &mut HostRecord) {
    let classification = classify(host);
    if classification.is_none() {
        debug!("{}: no classification rule matched", host.ip);
    }
    host.set_classification(classification);
}

/// Classifies every host; returns how many were classified.
pub fn classify_all(hosts: &mut [HostRecord]) -> usize {
    hosts
        .iter_mut()
        .map(|host| {
            classify_host(host);
            host.classification().is_some()
        })
        .filter(|classified| *classified)
        .count()
}
