//! Shared error type across finsight crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Required input missing or empty.
    ValidationError,
    /// Any other request-time failure.
    UnhandledError,
    /// Invalid startup configuration.
    ConfigError,
}

impl ClientCode {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::ValidationError => "VALIDATION_ERROR",
            ClientCode::UnhandledError => "UNHANDLED_ERROR",
            ClientCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FinsightError>;

/// Unified error type used by core and gateway.
///
/// Request-time variants display their raw message: that text is what the
/// caller receives in the `error` field.
#[derive(Debug, Error)]
pub enum FinsightError {
    #[error("URL is required")]
    UrlRequired,
    #[error("{0}")]
    MalformedBody(String),
    #[error("url has no segment at index {index} (found {found} segments)")]
    MissingSegment { index: usize, found: usize },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("{0}")]
    Internal(String),
}

impl FinsightError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            FinsightError::UrlRequired => ClientCode::ValidationError,
            FinsightError::MalformedBody(_)
            | FinsightError::MissingSegment { .. }
            | FinsightError::Internal(_) => ClientCode::UnhandledError,
            FinsightError::Config(_) | FinsightError::UnsupportedVersion(_) => {
                ClientCode::ConfigError
            }
        }
    }
}
