//! Route table and HTTP tracing.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::routing::get;
use irodori_observability::http_request_span;
use tower_http::trace::TraceLayer;
use tracing::Span;
use uuid::Uuid;

use crate::handlers;
use crate::state::AppState;

fn request_span(request: &Request<Body>) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    http_request_span!(request.method(), route, Uuid::new_v4())
}

fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    let status = response.status();
    span.record("http.status_code", status.as_u16());
    tracing::info!(
        status = status.as_u16(),
        latency_ms = latency.as_millis() as u64,
        "request finished"
    );
}

/// `/cn/`, `/jp/`, `/m3/` (trailing slash optional); any other path or
/// method is a JSON 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/cn/", get(handlers::cn_palette))
        .route("/cn", get(handlers::cn_palette))
        .route("/jp/", get(handlers::jp_palette))
        .route("/jp", get(handlers::jp_palette))
        .route("/m3/", get(handlers::m3_theme))
        .route("/m3", get(handlers::m3_theme))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(record_response),
        )
        .with_state(state)
}
