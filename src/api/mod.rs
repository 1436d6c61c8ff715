//! HTTP API module for the greeting and health endpoints.

pub mod dispatch;
pub mod handlers;
pub mod routes;

pub use dispatch::{handle, Reply};
pub use routes::create_router;
