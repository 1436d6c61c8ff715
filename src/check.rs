//! Startup self-check backing the `check-config` command.

use axum::http::Method;

use crate::api::{create_router, handle, Reply};
use crate::config::Config;
use crate::error::{Result, ServiceError};

/// Routes exercised by [`run_checks`].
pub const CHECKED_ROUTES: [&str; 2] = ["/", "/health"];

/// Validate `config`, then send `GET` to every route in-process.
///
/// Returns each route's reply. Fails on the first invalid setting or
/// non-2xx route.
pub async fn run_checks(config: &Config) -> Result<Vec<(&'static str, Reply)>> {
    config.validate()?;

    let router = create_router();
    let mut replies = Vec::with_capacity(CHECKED_ROUTES.len());
    for path in CHECKED_ROUTES {
        let reply = handle(&router, Method::GET, path).await?;
        if !reply.is_success() {
            return Err(ServiceError::CheckFailed {
                path,
                status: reply.status,
            });
        }
        replies.push((path, reply));
    }

    Ok(replies)
}
