//! Error types for the check-in runner.

/// Top-level error type for a check-in run.
#[derive(Debug, thiserror::Error)]
pub enum CheckinError {
    /// Configuration could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Vendor API client error.
    #[error(transparent)]
    Api(#[from] tst_api::ApiError),

    /// Notification delivery error.
    #[error("notify error: {0}")]
    Notify(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, CheckinError>;
