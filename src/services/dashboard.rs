// Dashboard service: composes the derived metrics into one card payload.
// The presentation layer renders this as-is; nothing here touches the filesystem.

use chrono::Utc;

use crate::config::DisplayConfig;
use crate::error::{DashboardError, ErrorPayload, MetricsError};
use crate::json_loader::{DashboardSnapshot, MetricSeries};
use crate::metrics::attention::{count_by_type, top_attention};
use crate::metrics::trend::trend_label;
use crate::metrics::{aggregate_with, classify_with, estimate_trend_with};
use crate::types::{
    AttentionItem, AttentionType, CoverageSummary, StatusLevel, TrendDirection,
};

/// Result type for dashboard data building
#[derive(Debug, serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DashboardResult {
    Success {
        data: DashboardData,
    },
    Empty {
        message: String,
    },
    Error {
        #[serde(flatten)]
        error: ErrorPayload,
    },
}

impl DashboardResult {
    pub fn from_error(err: &DashboardError) -> Self {
        DashboardResult::Error {
            error: ErrorPayload::from(err),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    pub built_at: String,
    pub metrics: Vec<MetricCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageSummary>,
    pub coverage_status: StatusLevel,
    pub attention: Vec<AttentionItem>,
    pub attention_counts: Vec<AttentionCount>,
    pub attention_total: usize,
}

/// One sparkline card.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<f64>,
    pub trend: TrendOutcome,
    pub target_status: StatusLevel,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TrendOutcome {
    #[serde(rename_all = "camelCase")]
    Available {
        direction: TrendDirection,
        magnitude_percent: f64,
        label: String,
    },
    Unavailable {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttentionCount {
    #[serde(rename = "type")]
    pub item_type: AttentionType,
    pub label: String,
    pub count: usize,
}

/// Build the dashboard payload from an externally supplied snapshot.
pub fn build_dashboard(snapshot: &DashboardSnapshot, config: &DisplayConfig) -> DashboardResult {
    if snapshot.metrics.is_empty() && snapshot.priorities.is_empty() && snapshot.attention.is_empty()
    {
        return DashboardResult::Empty {
            message: "No metrics, priorities or attention items in this snapshot.".to_string(),
        };
    }

    let metrics: Vec<MetricCard> = snapshot
        .metrics
        .iter()
        .map(|series| build_metric_card(series, config))
        .collect();

    let coverage = match aggregate_with(&snapshot.priorities, &config.status_thresholds) {
        Ok(summary) => Some(summary),
        Err(MetricsError::EmptyInput) => None,
        Err(e @ (MetricsError::DivisionByZero | MetricsError::Overflow)) => {
            log::warn!("Coverage unavailable: {}", e);
            None
        }
    };
    let coverage_status = coverage
        .as_ref()
        .map(|c| c.status)
        .unwrap_or(StatusLevel::Neutral);

    let attention = top_attention(&snapshot.attention, config.attention_top_n);
    let attention_counts = count_by_type(&snapshot.attention)
        .into_iter()
        .map(|(item_type, count)| AttentionCount {
            item_type,
            label: item_type.label().to_string(),
            count,
        })
        .collect();

    log::info!(
        "Built dashboard: {} metric cards, coverage {}, {} of {} attention items shown",
        metrics.len(),
        coverage_status.as_str(),
        attention.len(),
        snapshot.attention.len()
    );

    DashboardResult::Success {
        data: DashboardData {
            generated_at: snapshot.generated_at.clone(),
            built_at: Utc::now().to_rfc3339(),
            metrics,
            coverage,
            coverage_status,
            attention,
            attention_counts,
            attention_total: snapshot.attention.len(),
        },
    }
}

fn build_metric_card(series: &MetricSeries, config: &DisplayConfig) -> MetricCard {
    let latest = series.samples.last().copied();

    let trend = match estimate_trend_with(&series.samples, config.trend_flat_band) {
        Ok(t) => TrendOutcome::Available {
            direction: t.direction,
            magnitude_percent: t.magnitude_percent,
            label: trend_label(&t),
        },
        Err(e) => {
            log::warn!("Trend unavailable for metric '{}': {}", series.name, e);
            TrendOutcome::Unavailable {
                reason: e.to_string(),
            }
        }
    };

    let target_status = match (latest, series.target) {
        (Some(value), Some(target)) if target != 0.0 => {
            classify_with(value / target * 100.0, &config.status_thresholds)
        }
        _ => StatusLevel::Neutral,
    };

    MetricCard {
        name: series.name.clone(),
        latest,
        trend,
        target_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttentionPriority, CoverageStatus, PriorityCoverage};

    fn series(name: &str, samples: &[f64], target: Option<f64>) -> MetricSeries {
        MetricSeries {
            name: name.to_string(),
            samples: samples.to_vec(),
            target,
        }
    }

    fn attention(id: &str, priority: AttentionPriority) -> AttentionItem {
        AttentionItem {
            id: id.to_string(),
            item_type: AttentionType::Blocked,
            priority,
            experiment_ref: format!("exp-{}", id),
            context: String::new(),
            age: "3d".to_string(),
        }
    }

    fn unwrap_success(result: DashboardResult) -> DashboardData {
        match result {
            DashboardResult::Success { data } => data,
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn empty_snapshot_is_empty_result() {
        let result = build_dashboard(&DashboardSnapshot::default(), &DisplayConfig::default());
        assert!(matches!(result, DashboardResult::Empty { .. }));
    }

    #[test]
    fn metric_cards_carry_trend_and_target_status() {
        let snapshot = DashboardSnapshot {
            metrics: vec![
                series(
                    "Conversion rate",
                    &[8.0, 9.0, 11.0, 10.0, 12.0, 11.0, 13.0, 12.4],
                    Some(10.0),
                ),
                series("Signups", &[0.0, 5.0], None),
            ],
            ..DashboardSnapshot::default()
        };

        let data = unwrap_success(build_dashboard(&snapshot, &DisplayConfig::default()));
        assert_eq!(data.metrics.len(), 2);

        let conversion = &data.metrics[0];
        assert_eq!(conversion.latest, Some(12.4));
        assert_eq!(conversion.target_status, StatusLevel::Good);
        match &conversion.trend {
            TrendOutcome::Available {
                direction, label, ..
            } => {
                assert_eq!(*direction, TrendDirection::Up);
                assert_eq!(label, "+27.4%");
            }
            other => panic!("expected trend, got {:?}", other),
        }

        let signups = &data.metrics[1];
        assert_eq!(signups.target_status, StatusLevel::Neutral);
        assert!(matches!(signups.trend, TrendOutcome::Unavailable { .. }));
    }

    #[test]
    fn missing_priorities_give_neutral_coverage() {
        let snapshot = DashboardSnapshot {
            attention: vec![attention("a", AttentionPriority::Low)],
            ..DashboardSnapshot::default()
        };
        let data = unwrap_success(build_dashboard(&snapshot, &DisplayConfig::default()));
        assert!(data.coverage.is_none());
        assert_eq!(data.coverage_status, StatusLevel::Neutral);
    }

    #[test]
    fn coverage_uses_configured_thresholds() {
        let snapshot = DashboardSnapshot {
            priorities: vec![
                PriorityCoverage {
                    name: "Activation".to_string(),
                    experiment_count: 2,
                    status: CoverageStatus::Covered,
                },
                PriorityCoverage {
                    name: "Retention".to_string(),
                    experiment_count: 1,
                    status: CoverageStatus::Partial,
                },
            ],
            ..DashboardSnapshot::default()
        };

        let data = unwrap_success(build_dashboard(&snapshot, &DisplayConfig::default()));
        assert_eq!(data.coverage_status, StatusLevel::Warning);

        let mut lenient = DisplayConfig::default();
        lenient.status_thresholds.good = 75.0;
        let data = unwrap_success(build_dashboard(&snapshot, &lenient));
        assert_eq!(data.coverage_status, StatusLevel::Good);
    }

    #[test]
    fn attention_is_ranked_and_truncated() {
        let snapshot = DashboardSnapshot {
            attention: vec![
                attention("a", AttentionPriority::Low),
                attention("b", AttentionPriority::High),
                attention("c", AttentionPriority::Medium),
                attention("d", AttentionPriority::High),
            ],
            ..DashboardSnapshot::default()
        };
        let config = DisplayConfig {
            attention_top_n: 3,
            ..DisplayConfig::default()
        };

        let data = unwrap_success(build_dashboard(&snapshot, &config));
        let ids: Vec<&str> = data.attention.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "c"]);
        assert_eq!(data.attention_total, 4);
        assert_eq!(data.attention_counts.len(), 4);
        assert_eq!(data.attention_counts[0].count, 4);
        assert_eq!(data.attention_counts[0].label, "Blocked");
    }

    #[test]
    fn result_serializes_with_status_tag() {
        let snapshot = DashboardSnapshot {
            metrics: vec![series("Revenue", &[5.0, 0.0], Some(10.0))],
            ..DashboardSnapshot::default()
        };
        let json = serde_json::to_value(build_dashboard(&snapshot, &DisplayConfig::default()))
            .unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["coverageStatus"], "neutral");
        let card = &json["data"]["metrics"][0];
        assert_eq!(card["trend"]["state"], "available");
        assert_eq!(card["trend"]["direction"], "down");
        assert_eq!(card["trend"]["label"], "-100.0%");
        assert_eq!(card["targetStatus"], "critical");

    }

    #[test]
    fn error_result_is_flat_message_object() {
        let err = DashboardError::Parse("unexpected token".to_string());
        let json = serde_json::to_value(DashboardResult::from_error(&err)).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Failed to parse snapshot: unexpected token");
        assert_eq!(json["errorType"], "input");
        assert_eq!(
            json["recoverySuggestion"],
            "Check the snapshot file format is correct."
        );
        assert!(json.get("error").is_none());
    }

    #[test]
    fn out_of_range_series_is_unavailable_card() {
        let snapshot = DashboardSnapshot {
            metrics: vec![series("Events", &[f64::MAX; 4], None)],
            ..DashboardSnapshot::default()
        };
        let json = serde_json::to_value(build_dashboard(&snapshot, &DisplayConfig::default()))
            .unwrap();
        let trend = &json["data"]["metrics"][0]["trend"];
        assert_eq!(trend["state"], "unavailable");
        assert_eq!(
            trend["reason"],
            "Trend change is outside the representable range"
        );
        assert!(trend.get("magnitudePercent").is_none());
    }
}
