//! Unified error types for agroscore.
//!
//! The scoring engine itself has no intrinsic failure modes over valid
//! inputs; every error here is raised at a boundary — input validation,
//! weight configuration, or CLI I/O — before any scoring happens.

use std::path::PathBuf;
use thiserror::Error;

/// A single field-level validation failure.
///
/// Mirrors the shape used for configuration validation: the offending field
/// name plus a human-readable message, so callers can report every problem
/// with an input record at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputViolation {
    /// The attribute field that failed validation
    pub field: &'static str,
    /// Description of the violation
    pub message: String,
}

impl std::fmt::Display for InputViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Main error type for agroscore operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AgroScoreError {
    /// One or more attribute fields are outside their physical domain.
    ///
    /// The whole evaluation is rejected; no partial result is produced.
    #[error("invalid farm attributes: {}", format_violations(.0))]
    InvalidInput(Vec<InputViolation>),

    /// Weight configuration errors (weights not summing to 1.0, etc.)
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Attribute record could not be deserialized
    #[error("failed to parse farm attributes: {0}")]
    Parse(String),

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

fn format_violations(violations: &[InputViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenient Result type for agroscore operations
pub type Result<T> = std::result::Result<T, AgroScoreError>;

impl AgroScoreError {
    /// Create an invalid-input error from collected violations
    #[must_use]
    pub const fn invalid_input(violations: Vec<InputViolation>) -> Self {
        Self::InvalidInput(violations)
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }
}

impl From<std::io::Error> for AgroScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AgroScoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
