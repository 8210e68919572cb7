//! Error types for coaview-core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No snapshot has been loaded yet
    NotLoaded,
    /// Account not found
    AccountNotFound,
    /// Cyclic parent chain in the snapshot
    CyclicHierarchy,
    /// Snapshot provider failed to deliver
    SnapshotUnavailable,
    /// Internal error
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NotLoaded => write!(f, "NOT_LOADED"),
            ErrorCode::AccountNotFound => write!(f, "ACCOUNT_NOT_FOUND"),
            ErrorCode::CyclicHierarchy => write!(f, "CYCLIC_HIERARCHY"),
            ErrorCode::SnapshotUnavailable => write!(f, "SNAPSHOT_UNAVAILABLE"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - presented data would be wrong
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Detailed error information for consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error raised by the snapshot provider seam
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot not available: {message}")]
    Unavailable { message: String },
}

/// Main error type for coaview-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("No snapshot loaded")]
    NotLoaded,

    #[error("Account not found: {id}")]
    AccountNotFound { id: u64 },

    #[error("Cyclic parent chain involving accounts {ids:?}")]
    CyclicHierarchy { ids: Vec<u64> },

    #[error("Snapshot unavailable: {message}")]
    SnapshotUnavailable { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::NotLoaded => ErrorCode::NotLoaded,
            CoreError::AccountNotFound { .. } => ErrorCode::AccountNotFound,
            CoreError::CyclicHierarchy { .. } => ErrorCode::CyclicHierarchy,
            CoreError::SnapshotUnavailable { .. } => ErrorCode::SnapshotUnavailable,
            CoreError::InternalError { .. } => ErrorCode::InternalError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::NotLoaded => ErrorSeverity::Warning,
            CoreError::AccountNotFound { .. } => ErrorSeverity::Info,
            CoreError::CyclicHierarchy { .. } => ErrorSeverity::Critical,
            CoreError::SnapshotUnavailable { .. } => ErrorSeverity::Error,
            CoreError::InternalError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::CyclicHierarchy { ids } => {
                details = details.with_detail(serde_json::json!({ "accounts": ids }));
                details = details.with_suggestion(
                    "Fix the parent reference of the listed accounts in the upstream chart of accounts.".to_string(),
                );
                details = details.with_suggestion(
                    "The flat account list stays usable while the tree cannot be built.".to_string(),
                );
            }
            CoreError::AccountNotFound { id } => {
                details = details.with_suggestion(format!(
                    "Check whether account {} exists in the loaded snapshot.",
                    id
                ));
            }
            CoreError::SnapshotUnavailable { .. } => {
                details = details.with_suggestion(
                    "Retry once the upstream resolver has delivered the chart of accounts.".to_string(),
                );
            }
            CoreError::NotLoaded => {
                details = details
                    .with_suggestion("Load a snapshot before querying the presenter.".to_string());
            }
            _ => {}
        }

        details
    }
}

impl From<SnapshotError> for CoreError {
    fn from(error: SnapshotError) -> Self {
        CoreError::SnapshotUnavailable {
            message: error.to_string(),
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Error logger trait
pub trait ErrorLogger {
    /// Log an error
    fn log_error(&self, error: &CoreError, operation: &str);
    /// Log a warning
    fn log_warning(&self, message: &str, operation: &str);
}

/// Default error logger using log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, operation: &str) {
        log::error!(
            target: "coaview::error",
            "ERROR [{}] severity={} - Operation: {}",
            error.code(),
            error.severity(),
            operation
        );
    }

    fn log_warning(&self, message: &str, operation: &str) {
        log::warn!(
            target: "coaview::error",
            "WARNING: {} - Operation: {}",
            message,
            operation
        );
    }
}
