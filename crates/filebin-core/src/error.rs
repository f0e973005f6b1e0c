//! Error types module
//!
//! The `AppError` enum unifies the failure modes of the request router:
//! client errors (bad request, not found) and internal failures (corrupt
//! metadata document, I/O). Storage and metadata errors from the other
//! crates convert into these variants at the HTTP layer.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like unknown-id lookups
    Debug,
    /// Warning level - for malformed client requests
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Metadata document corrupt: {0}")]
    StoreCorrupt(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code to return for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::StoreCorrupt(_) | AppError::Internal(_) => 500,
        }
    }

    /// Variant name for structured logging.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BadRequest",
            AppError::NotFound(_) => "NotFound",
            AppError::StoreCorrupt(_) => "StoreCorrupt",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Client-facing message. Internal failure details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::StoreCorrupt(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Log level for this error.
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::NotFound(_) => LogLevel::Debug,
            AppError::BadRequest(_) => LogLevel::Warn,
            AppError::StoreCorrupt(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}
