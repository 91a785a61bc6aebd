//! Auth handlers: sign-in and the current caller.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MeResponse, TOKEN_TYPE};
use crate::error::ApiError;
use crate::extractors::{CurrentIdentity, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/signin
///
/// Unknown identifier and wrong secret produce the same 401.
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let identity = state
        .authenticator
        .authenticate(&req.identifier, &req.secret)
        .await?;

    let issued = state.token_codec.issue(&identity.identifier, Utc::now())?;

    Ok(Json(LoginResponse {
        access_token: issued.token,
        token_type: TOKEN_TYPE.to_string(),
        expires_at: issued.expires_at,
    }))
}

/// GET /api/auth/me
pub async fn me(caller: CurrentIdentity) -> Json<ApiResponse<MeResponse>> {
    Json(ApiResponse::ok(MeResponse {
        identifier: caller.identifier.clone(),
        roles: caller.roles.iter().map(ToString::to_string).collect(),
    }))
}
