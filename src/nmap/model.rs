//! nmap XML document model.
//!
//! Only the parts of the `nmaprun` schema the inventory consumes are modeled;
//! every other element and attribute is ignored during deserialization.

use serde::Deserialize;

/// Root `<nmaprun>` element of one scan result file.
#[derive(Debug, Default, Deserialize)]
pub struct ScanDocument {
    #[serde(rename = "host", default)]
    pub hosts: Vec<ScanHost>,
}

/// One `<host>` entry.
#[derive(Debug, Default, Deserialize)]
pub struct ScanHost {
    #[serde(default)]
    pub status: Option<Status>,

    #[serde(rename = "address", default)]
    pub addresses: Vec<Address>,

    #[serde(default)]
    pub hostnames: Option<Hostnames>,

    #[serde(default)]
    pub ports: Option<Ports>,

    #[serde(default)]
    pub os: Option<Os>,

    #[serde(default)]
    pub hostscript: Option<HostScript>,
}

#[derive(Debug, Deserialize)]
pub struct Status {
    #[serde(rename = "@state")]
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub struct Address {
    #[serde(rename = "@addr")]
    pub addr: String,
    #[serde(rename = "@addrtype", default)]
    pub addr_type: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Hostnames {
    #[serde(rename = "hostname", default)]
    pub hostnames: Vec<Hostname>,
}

#[derive(Debug, Deserialize)]
pub struct Hostname {
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Ports {
    #[serde(rename = "port", default)]
    pub ports: Vec<Port>,
}

#[derive(Debug, Deserialize)]
pub struct Port {
    #[serde(rename = "@protocol")]
    pub protocol: String,
    #[serde(rename = "@portid")]
    pub portid: u16,
    pub state: PortState,
    #[serde(default)]
    pub service: Option<Service>,
}

#[derive(Debug, Deserialize)]
pub struct PortState {
    #[serde(rename = "@state")]
    pub state: String,
}

/// Service identification attached to a port.
#[derive(Debug, Default, Deserialize)]
pub struct Service {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
    #[serde(rename = "@product", default)]
    pub product: Option<String>,
    #[serde(rename = "@version", default)]
    pub version: Option<String>,
    #[serde(rename = "@extrainfo", default)]
    pub extrainfo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Os {
    #[serde(rename = "osmatch", default)]
    pub matches: Vec<OsMatch>,
}

/// One OS fingerprint match; nmap lists them best first.
#[derive(Debug, Deserialize)]
pub struct OsMatch {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@accuracy", default)]
    pub accuracy: u8,
}

#[derive(Debug, Default, Deserialize)]
pub struct HostScript {
    #[serde(rename = "script", default)]
    pub scripts: Vec<Script>,
}

/// NSE script result: a raw `output` attribute plus optional structured `elem`s.
#[derive(Debug, Default, Deserialize)]
pub struct Script {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@output", default)]
    pub output: Option<String>,
    #[serde(rename = "elem", default)]
    pub elems: Vec<Elem>,
}

#[derive(Debug, Deserialize)]
pub struct Elem {
    #[serde(rename = "@key", default)]
    pub key: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl ScanHost {
    /// Whether nmap reported the host as up.
    pub fn is_up(&self) -> bool {
        self.status.as_ref().is_some_and(|s| s.state == "up")
    }

    /// First IPv4 address of the host.
    pub fn ipv4(&self) -> Option<&str> {
        self.addresses
            .iter()
            .find(|a| a.addr_type == "ipv4")
            .map(|a| a.addr.as_str())
    }

    /// All hostnames in document order.
    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.hostnames
            .iter()
            .flat_map(|h| h.hostnames.iter())
            .map(|h| h.name.as_str())
    }

    /// Open ports for one protocol (`"tcp"` or `"udp"`), in document order.
    pub fn open_ports<'a>(&'a self, protocol: &'a str) -> impl Iterator<Item = &'a Port> + 'a {
        self.ports
            .iter()
            .flat_map(|p| p.ports.iter())
            .filter(move |p| p.protocol == protocol && p.state.state == "open")
    }

    /// Best-ranked OS match, if OS detection ran.
    pub fn top_os_match(&self) -> Option<&OsMatch> {
        self.os.as_ref().and_then(|os| os.matches.first())
    }

    /// Host script result by script id.
    pub fn script(&self, id: &str) -> Option<&Script> {
        self.hostscript
            .as_ref()
            .and_then(|hs| hs.scripts.iter().find(|s| s.id == id))
    }
}

impl Script {
    /// Value of the structured `elem` with the given key.
    pub fn elem(&self, key: &str) -> Option<&str> {
        self.elems
            .iter()
            .find(|e| e.key.as_deref() == Some(key))
            .map(|e| e.value.as_str())
    }
}
