//! Access policy middleware: rejects requests the route table does not allow.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use stationery_auth::SecurityContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Evaluate the route table for this request's method, path and context.
///
/// A missing context is treated as anonymous.
pub async fn enforce_access(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = request
        .extensions()
        .get::<SecurityContext>()
        .cloned()
        .unwrap_or_default();

    if let Err(denial) =
        state
            .access_policy
            .evaluate(request.method(), request.uri().path(), &context)
    {
        tracing::debug!(
            method = %request.method(),
            path = %request.uri().path(),
            identifier = context.identifier().unwrap_or("-"),
            %denial,
            "Access denied"
        );
        return Err(denial.into());
    }

    Ok(next.run(request).await)
}
