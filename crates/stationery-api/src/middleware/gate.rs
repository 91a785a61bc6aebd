//! Request gate middleware: binds a `SecurityContext` to every request.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use stationery_auth::SecurityContext;

use crate::state::AppState;

/// Resolve the caller and store the result in request extensions.
///
/// Never rejects. A request that already carries a context keeps it.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if request.extensions().get::<SecurityContext>().is_none() {
        let header = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let context = state
            .request_gate
            .authenticate(header.as_deref(), Utc::now())
            .await;
        request.extensions_mut().insert(context);
    }

    next.run(request).await
}
