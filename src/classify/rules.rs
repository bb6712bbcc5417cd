//! Individual classification rules.
//!
//! Each rule inspects only the extracted fields of a [`HostRecord`] and
//! either produces a [`Classification`] or declines. Rules never look at a
//! previous classification, so they can be evaluated and tested in isolation.

use regex::Regex;
use std::sync::LazyLock;

use crate::classify::products::lookup;
use crate::record::{Classification, HostRecord, Method, ServiceRecord};

/// Signature shared by every cascade rule.
pub type Rule = fn(&HostRecord) -> Option<Classification>;

/// Cascade rules in priority order. The first rule to return `Some` wins.
pub const RULES: &[(Method, Rule)] = &[
    (Method::OsGuess, os_guess),
    (Method::SmbOs, smb_os),
    (Method::WebService, web_service),
    (Method::SshService, ssh_service),
    (Method::MicrosoftProduct, microsoft_product),
    (Method::SmbError, smb_error),
    (Method::Hostname, hostname),
    (Method::PrinterKeyword, printer_keyword),
    (Method::AppleKeyword, apple_keyword),
    (Method::CiscoSshKeyword, cisco_ssh_keyword),
];

const WEB_PORTS: [u16; 2] = [80, 443];
const SSH_PORT: u16 = 22;

/// Compiles a static pattern; a failure here is a programming error.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

// "imac" or "mac" immediately followed by a digit or a period. A bare
// "imac" with no digit or period after it does not match.
static MAC_HOSTNAME: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)(?:imac|mac)[0-9.]", "MAC_HOSTNAME"));

fn lowercase(value: Option<&str>) -> Option<String> {
    value.map(str::to_lowercase).filter(|v| !v.is_empty())
}

/// Rule 1: a 100%-accuracy OS match, unless it is an ambiguous "A or B"
/// guess. Apple guesses are taken even when ambiguous.
pub fn os_guess(host: &HostRecord) -> Option<Classification> {
    let guess = host.os_guess.as_deref()?;
    let lower = guess.to_lowercase();
    if !lower.contains("apple") && lower.contains(" or ") {
        return None;
    }
    let tag = lookup(guess)?;
    Classification::new(tag, Some(lower), Method::OsGuess)
}

/// Rule 2: the `os` field reported by SMB OS discovery.
pub fn smb_os(host: &HostRecord) -> Option<Classification> {
    let os = host.smb.as_ref()?.os()?;
    let tag = lookup(os)?;
    Classification::new(tag, lowercase(Some(os)), Method::SmbOs)
}

/// Rule 3: the banner of the web service on port 80, or port 443 when
/// nothing listens on 80.
pub fn web_service(host: &HostRecord) -> Option<Classification> {
    let service = WEB_PORTS.iter().find_map(|&port| host.service_on(port))?;
    let tag = lookup(&service.search_text())?;
    let flavor =
        lowercase(service.extrainfo.as_deref()).or_else(|| lowercase(service.product.as_deref()));
    Classification::new(tag, flavor, Method::WebService)
}

/// Rule 4: the SSH banner on port 22. The tag doubles as the flavor.
pub fn ssh_service(host: &HostRecord) -> Option<Classification> {
    let service = host.service_on(SSH_PORT)?;
    let tag = lookup(&service.search_text())?;
    Classification::new(tag, Some(tag.to_string()), Method::SshService)
}

/// Rule 5: any service whose product is a Microsoft/Windows product.
pub fn microsoft_product(host: &HostRecord) -> Option<Classification> {
    host.services
        .iter()
        .filter_map(|s| s.product.as_deref())
        .any(|product| lookup(product) == Some("windows"))
        .then(|| Classification::new("windows", Some("windows".into()), Method::MicrosoftProduct))
        .flatten()
}

/// Rule 6: SMB discovery failed with an error, which in practice only
/// happens against Windows hosts.
pub fn smb_error(host: &HostRecord) -> Option<Classification> {
    let output = host.smb.as_ref()?.output()?;
    if !output.contains("ERROR") {
        return None;
    }
    Classification::new("windows", Some("windows".into()), Method::SmbError)
}

/// Rule 7: Apple-style hostnames such as `imac5` or `mac.local`.
pub fn hostname(host: &HostRecord) -> Option<Classification> {
    if !MAC_HOSTNAME.is_match(&host.host) {
        return None;
    }
    Classification::new("apple", Some("osx".into()), Method::Hostname)
}

/// Rule 8: any service naming itself a printer.
///
/// The flavor is built from the capitalized words of the matching value
/// (vendor and model names, usually) and is left empty when there are none.
pub fn printer_keyword(host: &HostRecord) -> Option<Classification> {
    let matched = host
        .services
        .iter()
        .flat_map(|s| [&s.name, &s.product, &s.extrainfo])
        .filter_map(|v| v.as_deref())
        .find(|v| v.to_lowercase().contains("printer"))?;
    Classification::new("printer", capitalized_tokens(matched), Method::PrinterKeyword)
}

fn capitalized_tokens(value: &str) -> Option<String> {
    let tokens: Vec<String> = value
        .split_whitespace()
        .filter(|t| t.chars().next().is_some_and(char::is_uppercase))
        .map(str::to_lowercase)
        .collect();
    (!tokens.is_empty()).then(|| tokens.join(" "))
}

/// Rule 9: "apple" or "osx" anywhere in a service banner.
pub fn apple_keyword(host: &HostRecord) -> Option<Classification> {
    any_service_mentions(host, &["apple", "osx"])
        .then(|| Classification::new("apple", None, Method::AppleKeyword))
        .flatten()
}

/// Rule 10: a Cisco SSH banner on any port.
pub fn cisco_ssh_keyword(host: &HostRecord) -> Option<Classification> {
    any_service_mentions(host, &["cisco ssh"])
        .then(|| Classification::new("cisco", None, Method::CiscoSshKeyword))
        .flatten()
}

fn any_service_mentions(host: &HostRecord, keywords: &[&str]) -> bool {
    host.services
        .iter()
        .map(ServiceRecord::search_text)
        .map(|text| text.to_lowercase())
        .any(|text| keywords.iter().any(|k| text.contains(k)))
}
