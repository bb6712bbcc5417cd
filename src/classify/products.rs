//! Known-products table.
//!
//! Maps lowercase keywords found in OS names and service banners to a
//! canonical device-type tag.

/// Keyword → device-type tag, scanned in declaration order.
///
/// Order matters: more specific keywords come before generic ones
/// ("cisco" before "apple" so Cisco IOS banners are not read as Apple, and
/// "mac os" rather than "ios").
pub const KNOWN_PRODUCTS: &[(&str, &str)] = &[
    ("windows", "windows"),
    ("microsoft", "windows"),
    ("cisco", "cisco"),
    ("apple", "apple"),
    ("mac os", "apple"),
    ("osx", "apple"),
    ("printer", "printer"),
    ("jetdirect", "printer"),
    ("laserjet", "printer"),
    ("ubuntu", "linux"),
    ("debian", "linux"),
    ("centos", "linux"),
    ("red hat", "linux"),
    ("fedora", "linux"),
    ("linux", "linux"),
    ("freebsd", "bsd"),
    ("openbsd", "bsd"),
    ("vmware", "vmware"),
    ("junos", "juniper"),
    ("juniper", "juniper"),
    ("android", "android"),
    ("solaris", "solaris"),
    ("sunos", "solaris"),
];

/// Returns the tag of the first known keyword contained in `text`,
/// ignoring case.
pub fn lookup(text: &str) -> Option<&'static str> {
    let text = text.to_lowercase();
    KNOWN_PRODUCTS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, tag)| *tag)
}
