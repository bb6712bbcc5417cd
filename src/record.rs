//! Canonical host and service records.
//!
//! A [`HostRecord`] is built once per scan host by the extractor, classified
//! once, then flattened into export rows. Absent values stay `None` all the
//! way through; only the export writer renders them as a sentinel.

/// Transport protocol of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One open port and what nmap identified on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub port: u16,
    pub protocol: Protocol,
    pub name: Option<String>,
    pub product: Option<String>,
    pub version: Option<String>,
    pub extrainfo: Option<String>,
}

impl ServiceRecord {
    /// Creates a service with no identification fields.
    pub fn new(port: u16, protocol: Protocol) -> Self {
        Self {
            port,
            protocol,
            name: None,
            product: None,
            version: None,
            extrainfo: None,
        }
    }

    /// The identification fields that are present, in a fixed order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [&self.name, &self.product, &self.version, &self.extrainfo]
            .into_iter()
            .filter_map(|f| f.as_deref())
    }

    /// Space-joined identification fields, used for keyword matching.
    pub fn search_text(&self) -> String {
        self.fields().collect::<Vec<_>>().join(" ")
    }
}

/// Result of the SMB OS discovery host script.
///
/// Structured fields win over raw output when nmap produced both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmbDiscovery {
    Fields {
        os: Option<String>,
        fqdn: Option<String>,
        forest_dns: Option<String>,
    },
    Output(String),
}

impl SmbDiscovery {
    /// The `os` field of a structured result.
    pub fn os(&self) -> Option<&str> {
        match self {
            SmbDiscovery::Fields { os, .. } => os.as_deref(),
            SmbDiscovery::Output(_) => None,
        }
    }

    /// The raw script output of an unstructured result.
    pub fn output(&self) -> Option<&str> {
        match self {
            SmbDiscovery::Fields { .. } => None,
            SmbDiscovery::Output(text) => Some(text),
        }
    }
}

/// Cascade rule that produced a classification. The discriminant is the
/// rule's priority and the method code written to the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    OsGuess = 1,
    SmbOs = 2,
    WebService = 3,
    SshService = 4,
    MicrosoftProduct = 5,
    SmbError = 6,
    Hostname = 7,
    PrinterKeyword = 8,
    AppleKeyword = 9,
    CiscoSshKeyword = 10,
}

impl Method {
    /// Method code reported when no rule fired.
    pub const UNCLASSIFIED: i32 = -1;

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::OsGuess => "high-confidence OS guess",
            Method::SmbOs => "SMB OS discovery",
            Method::WebService => "web service banner",
            Method::SshService => "SSH service banner",
            Method::MicrosoftProduct => "Microsoft product",
            Method::SmbError => "SMB error signature",
            Method::Hostname => "hostname pattern",
            Method::PrinterKeyword => "printer keyword",
            Method::AppleKeyword => "Apple/OSX keyword",
            Method::CiscoSshKeyword => "Cisco SSH keyword",
        }
    }
}

/// A device type plus optional OS flavor, and the rule that decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    device_type: String,
    os_flavor: Option<String>,
    method: Method,
}

impl Classification {
    /// Builds a classification, or `None` when `device_type` is empty.
    ///
    /// An empty device type means the rule did not fire, so no
    /// classification with an empty device type can exist. An empty flavor
    /// is stored as `None`.
    pub fn new(
        device_type: impl Into<String>,
        os_flavor: Option<String>,
        method: Method,
    ) -> Option<Self> {
        let device_type = device_type.into();
        if device_type.is_empty() {
            return None;
        }
        Some(Self {
            device_type,
            os_flavor: os_flavor.filter(|f| !f.is_empty()),
            method,
        })
    }

    pub fn device_type(&self) -> &str {
        &self.device_type
    }

    pub fn os_flavor(&self) -> Option<&str> {
        self.os_flavor.as_deref()
    }

    pub fn method(&self) -> Method {
        self.method
    }
}

/// Everything known about one host, ready for classification and export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub ip: String,
    /// All hostnames joined with `" | "`; empty when there are none.
    pub host: String,
    pub services: Vec<ServiceRecord>,
    pub smb: Option<SmbDiscovery>,
    /// Top OS match, kept only at 100% accuracy.
    pub os_guess: Option<String>,
    classification: Option<Classification>,
}

impl HostRecord {
    /// Creates an unclassified record.
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            host: String::new(),
            services: Vec::new(),
            smb: None,
            os_guess: None,
            classification: None,
        }
    }

    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    /// Stores the cascade result. Only the classifier calls this.
    pub(crate) fn set_classification(&mut self, classification: Option<Classification>) {
        self.classification = classification;
    }

    pub fn device_type(&self) -> Option<&str> {
        self.classification.as_ref().map(|c| c.device_type())
    }

    pub fn os_flavor(&self) -> Option<&str> {
        self.classification.as_ref().and_then(|c| c.os_flavor())
    }

    /// Method code of the rule that fired, or `-1` when none did.
    pub fn method(&self) -> i32 {
        self.classification
            .as_ref()
            .map_or(Method::UNCLASSIFIED, |c| c.method().code())
    }

    pub fn service_on(&self, port: u16) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.port == port)
    }
}
