//! Main application modules.
//!
//! This module provides the end-of-run reporting used by the binary.

pub mod statistics;

// Re-export public API
pub use statistics::{
    print_classification_summary, print_error_statistics, print_simple_summary,
    ClassificationSummary,
};
