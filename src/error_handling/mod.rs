//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for each failure category
//! - Processing statistics tracking (errors, warnings, info metrics)
//!
//! Failures fall into four groups:
//! - **Configuration**: bad input, fatal before processing starts
//! - **Exhaustion**: nothing to report, fatal mid-run
//! - **Per-item**: one file or host dropped, counted, run continues
//! - **Non-determination**: a host no rule could classify; not an error at all

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    ConfigError, ErrorType, ExtractError, InfoType, InitializationError, InventoryError,
    ParseError, WarningType,
};
