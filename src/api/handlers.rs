//! HTTP API handlers.

use tracing::{debug, instrument};

/// Body returned by the root route.
pub const GREETING: &str = "Hello from Flask, served by Rust!";

/// Body returned by the health route.
pub const HEALTH_OK: &str = "OK";

/// Root handler - returns the greeting.
#[instrument]
pub async fn root() -> &'static str {
    debug!("Root endpoint accessed");
    GREETING
}

/// Health check handler - always returns 200.
#[instrument]
pub async fn health() -> &'static str {
    debug!("Health check endpoint accessed");
    HEALTH_OK
}
