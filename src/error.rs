//! Error types for derived metrics and dashboard assembly
//!
//! Errors are split by origin:
//! - MetricsError: a core computation had no defined value for its input
//! - DashboardError: config or snapshot loading failed around the core

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the pure metric computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// Trend baseline (first-half mean) is zero or has no samples.
    #[error("Trend baseline is zero; percentage change is undefined")]
    DivisionByZero,

    /// Coverage was requested over zero priorities.
    #[error("No priorities to aggregate")]
    EmptyInput,

    /// Averages or their ratio left the representable range.
    #[error("Trend change is outside the representable range")]
    Overflow,
}

impl MetricsError {
    /// Get a user-friendly recovery suggestion
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MetricsError::DivisionByZero => {
                "Supply a series whose first half has a non-zero average."
            }
            MetricsError::EmptyInput => "Add at least one tracked priority.",
            MetricsError::Overflow => "Rescale the series so its averages are comparable.",
        }
    }
}

/// Failures while loading inputs for the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(PathBuf),

    #[error("Could not find home directory")]
    HomeDirNotFound,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse snapshot: {0}")]
    Parse(String),
}

impl DashboardError {
    /// Returns true if supplying different input data would resolve this error
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DashboardError::SnapshotNotFound(_) | DashboardError::Parse(_)
        )
    }

    /// Get a user-friendly recovery suggestion
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DashboardError::Config(_) => "Check your configuration in ~/.growthdash/config.json",
            DashboardError::SnapshotNotFound(_) => {
                "Pass a snapshot path or set snapshotPath in ~/.growthdash/config.json"
            }
            DashboardError::HomeDirNotFound => "Set HOME or pass an explicit snapshot path.",
            DashboardError::Io(_) => "Check file permissions and try again.",
            DashboardError::Parse(_) => "Check the snapshot file format is correct.",
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Parse(err.to_string())
    }
}

/// Serializable error representation for the presentation layer
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub message: String,
    pub error_type: ErrorType,
    pub recovery_suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    Input,
    Environment,
}

impl From<&DashboardError> for ErrorPayload {
    fn from(err: &DashboardError) -> Self {
        let error_type = if err.is_input_error() {
            ErrorType::Input
        } else {
            ErrorType::Environment
        };

        ErrorPayload {
            message: err.to_string(),
            error_type,
            recovery_suggestion: err.recovery_suggestion().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_errors_are_input_errors() {
        let err = DashboardError::SnapshotNotFound(PathBuf::from("/tmp/missing.json"));
        assert!(err.is_input_error());
        assert!(!DashboardError::HomeDirNotFound.is_input_error());
        assert_eq!(
            MetricsError::EmptyInput.recovery_suggestion(),
            "Add at least one tracked priority."
        );
    }

    #[test]
    fn io_errors_map_to_environment_payload() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DashboardError::from(io);
        let payload = ErrorPayload::from(&err);
        assert_eq!(payload.error_type, ErrorType::Environment);
        assert!(payload.message.starts_with("IO error"));
    }

    #[test]
    fn payload_serializes_camel_case() {
        let err = DashboardError::Parse("bad json".to_string());
        let json = serde_json::to_value(ErrorPayload::from(&err)).unwrap();
        assert_eq!(json["errorType"], "input");
        assert_eq!(json["recoverySuggestion"], "Check the snapshot file format is correct.");
    }
}
