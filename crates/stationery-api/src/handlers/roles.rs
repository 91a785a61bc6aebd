//! Role listing.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, RoleResponse};
use crate::state::AppState;

/// GET /api/roles
pub async fn list_roles(State(state): State<AppState>) -> Json<ApiResponse<Vec<RoleResponse>>> {
    let roles = state
        .roles
        .list()
        .into_iter()
        .map(RoleResponse::from)
        .collect();
    Json(ApiResponse::ok(roles))
}
