//! Application initialization.
//!
//! The inventory has a single process-wide resource: the logger.

mod logger;

pub use logger::init_logger_with;
