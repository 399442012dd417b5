use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, info_span, Instrument};

/// Request-scoped tracing: one span per request carrying the matched route
/// and a fresh request id, with a completion line recording status and
/// latency.
pub async fn observability_middleware(
    matched_path: MatchedPath,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let route = matched_path.as_str().to_string();
    let start_time = Instant::now();

    let tracing_span = info_span!(
        "http_request",
        method = %method,
        route = %route,
        request_id = %uuid::Uuid::now_v7(),
    );

    let response = next.run(request).instrument(tracing_span.clone()).await;

    let duration = start_time.elapsed();
    tracing_span.in_scope(|| {
        info!(
            status = response.status().as_u16(),
            latency_ms = duration.as_millis() as u64,
            "request completed"
        );
    });

    response
}
