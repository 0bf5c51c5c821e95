//! Derived metrics and status classification for the experimentation dashboard.
//!
//! The core ([`metrics`]) is four pure functions: [`metrics::classify`],
//! [`metrics::estimate_trend`], [`metrics::aggregate`] and [`metrics::rank`].
//! [`services::dashboard`] composes them into the payload the UI renders.

pub mod config;
pub mod error;
pub mod json_loader;
pub mod metrics;
pub mod services;
pub mod types;

pub use error::{DashboardError, MetricsError};
pub use metrics::{aggregate, classify, estimate_trend, rank};
pub use types::{
    AttentionItem, AttentionPriority, AttentionType, CoverageStatus, CoverageSummary,
    MetricSample, PriorityCoverage, StatusLevel, Trend, TrendDirection,
};
