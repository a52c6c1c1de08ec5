//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success (a "no path found" result is a success, not an error)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing/malformed input, unknown node or landmark)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the waypath CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing dataset, malformed record, unknown name (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("node not found in graph: {id}")]
    MissingNode { id: String },

    #[error("unknown landmark: {short_name}")]
    UnknownLandmark { short_name: String },

    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    #[error("invalid record in {path:?} at line {line}: {reason}")]
    InvalidRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl WaypathError {
    /// Create an error for a start/end value that is not a graph member
    pub fn missing_node(id: impl std::fmt::Debug) -> Self {
        WaypathError::MissingNode {
            id: format!("{:?}", id),
        }
    }

    /// Create an error for a malformed input record
    pub fn invalid_record(
        path: impl Into<PathBuf>,
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        WaypathError::InvalidRecord {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::UnknownFormat(_) | WaypathError::UsageError(_) => ExitCode::Usage,

            WaypathError::MissingNode { .. }
            | WaypathError::UnknownLandmark { .. }
            | WaypathError::DatasetNotFound { .. }
            | WaypathError::InvalidRecord { .. } => ExitCode::Data,

            WaypathError::Io(_) | WaypathError::Json(_) | WaypathError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::MissingNode { .. } => "missing_node",
            WaypathError::UnknownLandmark { .. } => "unknown_landmark",
            WaypathError::DatasetNotFound { .. } => "dataset_not_found",
            WaypathError::InvalidRecord { .. } => "invalid_record",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            WaypathError::UnknownFormat("xml".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WaypathError::missing_node("A").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WaypathError::invalid_record("data.tsv", 3, "expected two fields").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WaypathError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = WaypathError::UnknownLandmark {
            short_name: "XYZ".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_landmark");
        assert_eq!(json["error"]["message"], "unknown landmark: XYZ");
    }

    #[test]
    fn test_invalid_record_message_names_line() {
        let err = WaypathError::invalid_record("net.tsv", 7, "expected member<TAB>group");
        assert!(err.to_string().contains("line 7"));
    }
}
