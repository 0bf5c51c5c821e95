use serde::{Deserialize, Serialize};

/// One observation in an ordered metric series. Only order is retained.
pub type MetricSample = f64;

/// Health scale used to color-code cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Good,
    Warning,
    Critical,
    Neutral, // Nothing to classify (no data)
}

impl StatusLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Change between the first and second half of a series.
///
/// `magnitude_percent` is always non-negative; the sign lives in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub direction: TrendDirection,
    pub magnitude_percent: f64,
}

/// Experiment coverage of a tracked priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Covered,
    Partial,
    Gap,
}

/// A strategic priority and how well current experiments cover it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityCoverage {
    pub name: String,
    #[serde(default)]
    pub experiment_count: u32,
    pub status: CoverageStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    pub covered_count: usize,
    pub partial_count: usize,
    pub gap_list: Vec<String>,
    pub coverage_percent: f64,
    pub status: StatusLevel,
    pub total_count: usize,
    pub total_experiments: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionType {
    Blocked,
    ReadyToShip,
    Stale,
    Guardrail,
}

impl AttentionType {
    pub const ALL: [AttentionType; 4] = [
        AttentionType::Blocked,
        AttentionType::ReadyToShip,
        AttentionType::Stale,
        AttentionType::Guardrail,
    ];

    /// Human-readable badge text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Blocked => "Blocked",
            Self::ReadyToShip => "Ready to ship",
            Self::Stale => "Stale",
            Self::Guardrail => "Guardrail breach",
        }
    }
}

/// Ordering is `High < Medium < Low`, so an ascending sort puts urgent items first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionPriority {
    High,
    Medium,
    Low,
}

/// An experiment flagged for human action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttentionItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: AttentionType,
    pub priority: AttentionPriority,
    pub experiment_ref: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub age: String,
}
