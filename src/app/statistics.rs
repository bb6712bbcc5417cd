//! End-of-run statistics.

use log::info;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};
use crate::record::{HostRecord, Method};

/// How many hosts the cascade classified, and by which rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    pub total: usize,
    pub classified: usize,
    pub by_method: BTreeMap<Method, usize>,
}

impl ClassificationSummary {
    pub fn from_hosts(hosts: &[HostRecord]) -> Self {
        let mut summary = Self {
            total: hosts.len(),
            ..Default::default()
        };
        for method in hosts
            .iter()
            .filter_map(|h| h.classification())
            .map(|c| c.method())
        {
            summary.classified += 1;
            *summary.by_method.entry(method).or_insert(0) += 1;
        }
        summary
    }

    pub fn unclassified(&self) -> usize {
        self.total - self.classified
    }

    /// Share of hosts that were classified, 0.0 for an empty run.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.classified as f64 / self.total as f64
    }
}

/// Logs the classified fraction and the per-method breakdown.
pub fn print_classification_summary(summary: &ClassificationSummary) {
    info!(
        "Classified {} of {} host{} ({:.1}%)",
        summary.classified,
        summary.total,
        if summary.total == 1 { "" } else { "s" },
        summary.fraction() * 100.0
    );
    for (method, count) in &summary.by_method {
        info!("   {} ({}): {}", method.as_str(), method.code(), count);
    }
    if summary.unclassified() > 0 {
        info!(
            "   unclassified ({}): {}",
            Method::UNCLASSIFIED,
            summary.unclassified()
        );
    }
}

/// Prints a simple one-line summary of the run.
pub fn print_simple_summary(hosts: usize, rows: usize, elapsed_seconds: f64) {
    info!(
        "Inventoried {} host{} into {} row{} in {:.1}s",
        hosts,
        if hosts == 1 { "" } else { "s" },
        rows,
        if rows == 1 { "" } else { "s" },
        elapsed_seconds
    );
}

/// Prints error, warning, and info statistics to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    let total_warnings = error_stats.total_warnings();
    let total_info = error_stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = error_stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = error_stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
