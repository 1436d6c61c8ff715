//! Minimal greeting and health-check HTTP service.
//!
//! Two fixed routes:
//!
//! ```text
//! GET /        -> 200 "Hello from Flask, served by Rust!"
//! GET /health  -> 200 "OK"
//! ```
//!
//! Anything else gets axum's default 404/405.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Router, handlers and in-process dispatch
//! - [`check`]: Startup self-check for `check-config`
//! - [`metrics`]: Request metrics and Prometheus exporter
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod check;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
