//! HTTP API route definitions.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::{info, Span};

use super::handlers::{health, root};
use crate::metrics::track_http;

/// Create the API router.
pub fn create_router() -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .layer(middleware::from_fn(track_http))
        .layer(trace_layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, Method, StatusCode};
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str) -> Response<Body> {
        create_router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn root_endpoint_returns_ok() {
        let response = send(Method::GET, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_endpoint_returns_plain_text() {
        let response = send(Method::GET, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn unknown_path_returns_404() {
        let response = send(Method::GET, "/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_returns_405() {
        let response = send(Method::POST, "/health").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn head_is_answered_for_get_routes() {
        let response = send(Method::HEAD, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert!(body.is_empty());
    }
}
