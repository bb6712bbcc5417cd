//! scan_inventory library: device inventory from nmap scan results
//!
//! This library reads completed nmap XML scans, infers a device type and OS
//! flavor for every up host through a fixed-priority rule cascade, and
//! exports one flat row per (host, service).
//!
//! # Example
//!
//! ```no_run
//! use scan_inventory::{run_inventory, Config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     input_dirs: vec![std::path::PathBuf::from("./scans")],
//!     ..Default::default()
//! };
//!
//! let report = run_inventory(config)?;
//! println!("Classified {} of {} hosts, wrote {} rows",
//!          report.classified, report.hosts, report.rows);
//! # Ok(())
//! # }
//! ```
//!
//! The stages are usable on their own as well: [`extract::extract_host`],
//! [`classify::classify`] and [`flatten::flatten_host`] are pure functions
//! over in-memory records.

mod app;
pub mod classify;
pub mod config;
pub mod discovery;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod flatten;
pub mod initialization;
pub mod nmap;
pub mod record;
mod run;

// Re-export public API
pub use app::ClassificationSummary;
pub use config::{Config, ExportFormat, LogFormat, LogLevel};
pub use flatten::FlatServiceRow;
pub use record::{Classification, HostRecord, Method, Protocol, ServiceRecord, SmbDiscovery};
pub use run::{run_inventory, InventoryReport};
