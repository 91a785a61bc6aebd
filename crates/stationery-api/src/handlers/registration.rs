//! Self-service registration.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::RegisterRequest;
use crate::dto::response::{ApiResponse, IdentityResponse};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/auth/register and POST /api/clientes/registro
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<IdentityResponse>>), ApiError> {
    let identity = state
        .registrar
        .register(&req.identifier, &req.secret, &req.display_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(IdentityResponse::from(identity))),
    ))
}
