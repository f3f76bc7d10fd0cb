//! Error types and exit codes for waypoint
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid graph input)

mod macros;

use thiserror::Error;

/// Process exit codes used by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid edge or weight (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waypoint operations
#[derive(Error, Debug)]
pub enum WaypointError {
    /// Extracting from an empty priority queue
    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("invalid weight for edge {from} -> {to}: {weight} (expected a finite, non-negative number)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("invalid edge spec: {0} (expected FROM:TO:WEIGHT)")]
    InvalidEdgeSpec(String),

    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WaypointError {
    /// Create an error for an edge weight outside `[0, inf)`
    pub fn invalid_weight(
        from: impl std::fmt::Debug,
        to: impl std::fmt::Debug,
        weight: f64,
    ) -> Self {
        WaypointError::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypointError::UnknownFormat(_)
            | WaypointError::UsageError(_)
            | WaypointError::InvalidEdgeSpec(_) => ExitCode::Usage,

            WaypointError::InvalidWeight { .. } => ExitCode::Data,

            WaypointError::EmptyQueue | WaypointError::Io(_) | WaypointError::Json(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypointError::EmptyQueue => "empty_queue",
            WaypointError::InvalidWeight { .. } => "invalid_weight",
            WaypointError::InvalidEdgeSpec(_) => "invalid_edge_spec",
            WaypointError::UnknownFormat(_) => "unknown_format",
            WaypointError::UsageError(_) => "usage_error",
            WaypointError::Io(_) => "io_error",
            WaypointError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, WaypointError>;
