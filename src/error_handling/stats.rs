//! Processing statistics tracking.
//!
//! Counts what happened to files and hosts during a run, so the end-of-run
//! summary can say what was skipped and why.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// Processing statistics tracker.
///
/// Tracks errors, warnings, and informational metrics using atomic counters
/// behind `&self`, so every pipeline stage can take a shared reference. All
/// types are initialized to zero on creation.
///
/// # Categories
///
/// - **Errors**: An item (file or host) that could not be processed
/// - **Warnings**: Input deliberately left out
/// - **Info**: Stage totals
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: zeroed(),
            warnings: zeroed(),
            info: zeroed(),
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        bump(&self.errors, error, 1);
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        self.add_warning(warning, 1);
    }

    /// Add `count` to a warning counter (test-mode caps drop many at once).
    pub fn add_warning(&self, warning: WarningType, count: usize) {
        bump(&self.warnings, warning, count);
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        self.add_info(info_type, 1);
    }

    /// Add `count` to an info counter.
    pub fn add_info(&self, info_type: InfoType, count: usize) {
        bump(&self.info, info_type, count);
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        read(&self.errors, &error)
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        read(&self.warnings, &warning)
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        read(&self.info, &info_type)
    }

    /// Total across all error types.
    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Total across all warning types.
    pub fn total_warnings(&self) -> usize {
        self.warnings.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Total across all info types.
    pub fn total_info(&self) -> usize {
        self.info.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

fn zeroed<K: IntoEnumIterator + Eq + Hash>() -> HashMap<K, AtomicUsize> {
    K::iter().map(|key| (key, AtomicUsize::new(0))).collect()
}

fn bump<K: Eq + Hash + Debug>(counters: &HashMap<K, AtomicUsize>, key: K, count: usize) {
    match counters.get(&key) {
        Some(counter) => {
            counter.fetch_add(count, Ordering::Relaxed);
        }
        // Every key is inserted by `zeroed`, so this only fires on a new
        // enum variant that skipped `EnumIter`.
        None => log::error!("No counter registered for {:?}", key),
    }
}

fn read<K: Eq + Hash>(counters: &HashMap<K, AtomicUsize>, key: &K) -> usize {
    counters
        .get(key)
        .map(|c| c.load(Ordering::SeqCst))
        .unwrap_or(0)
}
