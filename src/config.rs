//! Display configuration stored in ~/.growthdash/config.json
//!
//! Every field has a default, so a partial file (or no file at all) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

pub const DEFAULT_GOOD_THRESHOLD: f64 = 80.0;
pub const DEFAULT_WARNING_THRESHOLD: f64 = 50.0;
pub const DEFAULT_TREND_FLAT_BAND: f64 = 2.0;
pub const DEFAULT_ATTENTION_TOP_N: usize = 5;

/// Lower bounds (inclusive) of the `good` and `warning` bands, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusThresholds {
    #[serde(default = "default_good")]
    pub good: f64,
    #[serde(default = "default_warning")]
    pub warning: f64,
}

fn default_good() -> f64 {
    DEFAULT_GOOD_THRESHOLD
}

fn default_warning() -> f64 {
    DEFAULT_WARNING_THRESHOLD
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            good: DEFAULT_GOOD_THRESHOLD,
            warning: DEFAULT_WARNING_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    #[serde(default)]
    pub status_thresholds: StatusThresholds,
    #[serde(default = "default_trend_flat_band")]
    pub trend_flat_band: f64,
    #[serde(default = "default_attention_top_n")]
    pub attention_top_n: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<String>,
}

fn default_trend_flat_band() -> f64 {
    DEFAULT_TREND_FLAT_BAND
}

fn default_attention_top_n() -> usize {
    DEFAULT_ATTENTION_TOP_N
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            status_thresholds: StatusThresholds::default(),
            trend_flat_band: DEFAULT_TREND_FLAT_BAND,
            attention_top_n: DEFAULT_ATTENTION_TOP_N,
            snapshot_path: None,
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), DashboardError> {
        let t = &self.status_thresholds;
        if !t.good.is_finite() || !t.warning.is_finite() {
            return Err(DashboardError::Config(
                "statusThresholds must be finite numbers".to_string(),
            ));
        }
        if t.good < t.warning {
            return Err(DashboardError::Config(format!(
                "statusThresholds.good ({}) must not be below statusThresholds.warning ({})",
                t.good, t.warning
            )));
        }
        if !self.trend_flat_band.is_finite() || self.trend_flat_band < 0.0 {
            return Err(DashboardError::Config(format!(
                "trendFlatBand must be a non-negative number, got {}",
                self.trend_flat_band
            )));
        }
        if self.attention_top_n == 0 {
            return Err(DashboardError::Config(
                "attentionTopN must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Directory holding config and the default snapshot (~/.growthdash)
pub fn state_dir() -> Result<PathBuf, DashboardError> {
    let home = dirs::home_dir().ok_or(DashboardError::HomeDirNotFound)?;
    Ok(home.join(".growthdash"))
}

/// Get the canonical config file path (~/.growthdash/config.json)
pub fn config_path() -> Result<PathBuf, DashboardError> {
    Ok(state_dir()?.join("config.json"))
}

/// Load configuration from ~/.growthdash/config.json
pub fn load_config() -> Result<DisplayConfig, DashboardError> {
    load_config_from(&config_path()?)
}

/// Load configuration from an explicit path. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<DisplayConfig, DashboardError> {
    if !path.exists() {
        log::info!(
            "No config at {}; using default display thresholds",
            path.display()
        );
        return Ok(DisplayConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| DashboardError::Config(format!("Failed to read config: {}", e)))?;
    let config: DisplayConfig = serde_json::from_str(&content)
        .map_err(|e| DashboardError::Config(format!("Failed to parse config: {}", e)))?;

    config.validate()?;
    log::debug!("Loaded display config from {}", path.display());
    Ok(config)
}
