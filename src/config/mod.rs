//! Application configuration and constants.
//!
//! This module provides:
//! - Pipeline constants (completion marker, sentinel, test-mode caps)
//! - CLI option types and parsing
//! - The library `Config` and its validation

mod constants;
mod types;
mod validate;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ExportFormat, LogFormat, LogLevel, Opt};
pub use validate::validate_config;
