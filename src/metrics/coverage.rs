//! Strategy coverage: how many tracked priorities have experiment activity.

use crate::config::StatusThresholds;
use crate::error::MetricsError;
use crate::metrics::status::classify_with;
use crate::types::{CoverageStatus, CoverageSummary, PriorityCoverage};

const PARTIAL_WEIGHT: f64 = 0.5;

/// Aggregate coverage and classify it at the default 80/50 thresholds.
pub fn aggregate(items: &[PriorityCoverage]) -> Result<CoverageSummary, MetricsError> {
    aggregate_with(items, &StatusThresholds::default())
}

/// `(covered + 0.5 * partial) / total * 100`, classified with `thresholds`.
///
/// Gap names are reported in input order.
pub fn aggregate_with(
    items: &[PriorityCoverage],
    thresholds: &StatusThresholds,
) -> Result<CoverageSummary, MetricsError> {
    if items.is_empty() {
        return Err(MetricsError::EmptyInput);
    }

    let mut covered_count = 0usize;
    let mut partial_count = 0usize;
    let mut gap_list = Vec::new();
    let mut total_experiments = 0u32;

    for item in items {
        match item.status {
            CoverageStatus::Covered => covered_count += 1,
            CoverageStatus::Partial => partial_count += 1,
            CoverageStatus::Gap => gap_list.push(item.name.clone()),
        }
        total_experiments = total_experiments.saturating_add(item.experiment_count);
    }

    let total_count = items.len();
    let coverage_percent = (covered_count as f64 + PARTIAL_WEIGHT * partial_count as f64)
        / total_count as f64
        * 100.0;
    let status = classify_with(coverage_percent, thresholds);

    log::debug!(
        "coverage: {} covered, {} partial, {} gaps of {} -> {:.1}% ({})",
        covered_count,
        partial_count,
        gap_list.len(),
        total_count,
        coverage_percent,
        status.as_str()
    );

    Ok(CoverageSummary {
        covered_count,
        partial_count,
        gap_list,
        coverage_percent,
        status,
        total_count,
        total_experiments,
    })
}
