//! In-process request dispatch.
//!
//! Drives a single request through the router without a socket and
//! collects the response as text. Handy for smoke tests and for
//! `check-config`, which exercises the routes before reporting success.

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use crate::error::Result;

/// Upper bound on collected body size.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Collected result of one dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Response status.
    pub status: StatusCode,
    /// Response body as UTF-8 text.
    pub body: String,
}

impl Reply {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Send `method path` through `router` and collect the reply.
pub async fn handle(router: &Router, method: Method, path: &str) -> Result<Reply> {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())?;

    // Infallible: the router's error type is `Infallible`.
    let response = match router.clone().oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), MAX_BODY_BYTES).await?;
    let body = String::from_utf8(bytes.to_vec())?;

    Ok(Reply { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::create_router;
    use crate::error::ServiceError;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn home_route() {
        let router = create_router();
        let reply = handle(&router, Method::GET, "/").await.unwrap();

        assert_eq!(reply.status, StatusCode::OK);
        assert!(reply.body.contains("Hello from Flask"));
    }

    #[tokio::test]
    async fn health_route() {
        let router = create_router();
        let reply = handle(&router, Method::GET, "/health").await.unwrap();

        assert_eq!(reply.status, StatusCode::OK);
        assert!(reply.body.contains("OK"));
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let router = create_router();
        let first = handle(&router, Method::GET, "/").await.unwrap();

        for _ in 0..5 {
            assert_eq!(handle(&router, Method::GET, "/").await.unwrap(), first);
        }
    }

    #[tokio::test]
    async fn unknown_route_is_not_an_error() {
        let router = create_router();
        let reply = handle(&router, Method::GET, "/nope").await.unwrap();

        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert!(!reply.is_success());
        assert_eq!(reply.body, "");
    }

    #[tokio::test]
    async fn bad_uri_is_reported() {
        let router = create_router();
        let err = handle(&router, Method::GET, "not a uri").await.unwrap_err();
        assert!(matches!(err, ServiceError::Request(_)), "unexpected error: {}", err);
    }
}
