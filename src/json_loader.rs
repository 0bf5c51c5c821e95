//! Snapshot loader for dashboard input data
//!
//! The reporting service writes a single JSON snapshot per reporting cycle.
//! Resolution order for its location:
//! 1. Explicit path (CLI argument)
//! 2. `snapshotPath` from ~/.growthdash/config.json
//! 3. `~/.growthdash/snapshot.json`

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{state_dir, DisplayConfig};
use crate::error::DashboardError;
use crate::types::{AttentionItem, MetricSample, PriorityCoverage};

/// One reporting cycle's worth of dashboard input.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub generated_at: Option<String>,
    #[serde(default)]
    pub metrics: Vec<MetricSeries>,
    #[serde(default)]
    pub priorities: Vec<PriorityCoverage>,
    #[serde(default)]
    pub attention: Vec<AttentionItem>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSeries {
    pub name: String,
    #[serde(default)]
    pub samples: Vec<MetricSample>,
    pub target: Option<f64>,
}

/// Pick the snapshot location from CLI argument, config, or the default.
pub fn resolve_snapshot_path(
    cli_arg: Option<&str>,
    config: &DisplayConfig,
) -> Result<PathBuf, DashboardError> {
    if let Some(arg) = cli_arg {
        return Ok(PathBuf::from(arg));
    }
    if let Some(configured) = config.snapshot_path.as_deref() {
        return Ok(PathBuf::from(configured));
    }
    Ok(state_dir()?.join("snapshot.json"))
}

/// Load a snapshot from disk
pub fn load_snapshot(path: &Path) -> Result<DashboardSnapshot, DashboardError> {
    if !path.exists() {
        return Err(DashboardError::SnapshotNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let snapshot: DashboardSnapshot = serde_json::from_str(&content)?;

    log::info!(
        "Loaded snapshot {}: {} metrics, {} priorities, {} attention items",
        path.display(),
        snapshot.metrics.len(),
        snapshot.priorities.len(),
        snapshot.attention.len()
    );
    Ok(snapshot)
}
