//! Error types for the tst-api crate.
//!
//! Messages are stable and never contain the full account token.

/// Errors that can occur while talking to the vendor API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network-level failure (connect, DNS, TLS, reading the body).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server kept answering with a non-200 status.
    #[error("HTTP status error: {0}")]
    HttpStatus(String),

    /// The response body was not the JSON shape we expected.
    #[error("parse error: {0}")]
    Parse(String),

    /// A well-formed response whose own `code` signals failure.
    #[error(
        "business error (code {code}): {}",
        .message.as_deref().unwrap_or("unknown error")
    )]
    Business {
        /// Server-side status code as it appeared in the body.
        code: String,
        /// Server-supplied `msg`, if any.
        message: Option<String>,
    },

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for tst-api results.
pub type Result<T> = std::result::Result<T, ApiError>;
