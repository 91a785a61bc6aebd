//! Route definitions for the stationery HTTP API.
//!
//! All routes are mounted under `/api`. The access policy, not the router,
//! decides who may call what; see [`crate::policy`].

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};

use stationery_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with the security middleware applied.
///
/// Layer order, outermost first: request gate, request logging, access
/// policy. Unrouted paths also pass the policy before the 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(registration_routes())
        .merge(role_routes())
        .merge(health_routes())
        .fallback(not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::access::enforce_access,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::resolve_identity,
        ))
        .with_state(state)
}

/// Sign-in and current caller
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signin", post(handlers::auth::signin))
        .route("/api/auth/me", get(handlers::auth::me))
}

/// Self-service registration, under both the auth and the customer paths
fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(handlers::registration::register))
        .route(
            "/api/clientes/registro",
            post(handlers::registration::register),
        )
}

fn role_routes() -> Router<AppState> {
    Router::new().route("/api/roles", get(handlers::roles::list_roles))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/api/health", get(handlers::health::health))
}

async fn not_found() -> ApiError {
    AppError::not_found("No such route").into()
}
