//! Request logging middleware

use std::time::{Duration, Instant};

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Requests slower than this are logged at warn level
const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_millis(100);

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::info!(%method, %uri, "Request");

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    if duration > SLOW_REQUEST_THRESHOLD {
        tracing::warn!(%method, %uri, ?duration, "Slow request");
    }

    tracing::info!(
        %method,
        %uri,
        status = response.status().as_u16(),
        elapsed_ms = duration.as_millis() as u64,
        "Response"
    );

    response
}
