//! Application builder: wires router, middleware and state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use stationery_auth::PasswordHasher;
use stationery_core::config::AppConfig;
use stationery_core::error::AppError;
use stationery_store::{DataSeeder, IdentityRepository, RoleRepository};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// First-run setup: bootstrap roles, seed demo identities if enabled, and
/// wire the application state.
pub fn bootstrap(config: AppConfig) -> Result<AppState, AppError> {
    let roles = Arc::new(RoleRepository::from_config(&config.auth)?);
    let identities = Arc::new(IdentityRepository::new(roles.clone()));

    let seeded = DataSeeder::new(
        identities.clone(),
        PasswordHasher::new(),
        config.seed.clone(),
    )
    .seed()?;
    tracing::info!(
        roles = roles.list().len(),
        seeded_identities = seeded,
        "Bootstrap complete"
    );

    AppState::new(config, roles, identities)
}

/// Serve `state` on the configured address until Ctrl+C.
pub async fn run_server(state: AppState) -> Result<(), AppError> {
    let addr = state.config.bind_address();
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Stationery server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C; shutting down");
    }
}
