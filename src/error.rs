//! Unified error types for the service.

use thiserror::Error;

/// Unified error type for the service.
///
/// Requests themselves never produce one of these: unmatched routes are
/// ordinary 404/405 responses. These cover startup and in-process dispatch.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Request could not be built (bad method or URI).
    #[error("invalid request: {0}")]
    Request(#[from] axum::http::Error),

    /// A route answered the startup self-check with a non-2xx status.
    #[error("GET {path} returned {status}")]
    CheckFailed {
        /// Route that failed.
        path: &'static str,
        /// Status it returned.
        status: axum::http::StatusCode,
    },

    /// Failed to collect a response body.
    #[error("body error: {0}")]
    Body(#[from] axum::Error),

    /// Response body was not valid UTF-8 text.
    #[error("response body is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
