//! Access log middleware.
//!
//! Runs inside the request gate, so the resolved caller is available, and
//! outside the access policy, so 401/403 outcomes are logged too.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use stationery_auth::SecurityContext;

const ANONYMOUS: &str = "-";

/// Logs method, path, caller, status and duration of every request.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let caller = caller_of(&request);
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::warn!(
            %method,
            %path,
            %caller,
            status = status.as_u16(),
            duration_ms,
            "HTTP request failed"
        );
    } else {
        tracing::info!(
            %method,
            %path,
            %caller,
            status = status.as_u16(),
            duration_ms,
            "HTTP request"
        );
    }

    response
}

/// Identifier bound by the request gate, or `-` for anonymous callers.
fn caller_of(request: &Request) -> String {
    request
        .extensions()
        .get::<SecurityContext>()
        .and_then(SecurityContext::identifier)
        .unwrap_or(ANONYMOUS)
        .to_owned()
}
