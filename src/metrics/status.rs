//! Ratio to status-level classification.

use crate::config::StatusThresholds;
use crate::types::StatusLevel;

/// Classify a percentage with the default 80/50 thresholds.
///
/// Both boundaries are inclusive on the higher side. Values outside 0–100 are
/// legal; callers clamp if they need to.
pub fn classify(ratio_percent: f64) -> StatusLevel {
    classify_with(ratio_percent, &StatusThresholds::default())
}

pub fn classify_with(ratio_percent: f64, thresholds: &StatusThresholds) -> StatusLevel {
    if ratio_percent >= thresholds.good {
        StatusLevel::Good
    } else if ratio_percent >= thresholds.warning {
        StatusLevel::Warning
    } else {
        StatusLevel::Critical
    }
}
