//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use stationery_auth::{
    AccessPolicyEvaluator, Authenticator, IdentityRegistrar, PasswordHasher, RequestGate,
    StoreIdentityLoader, TokenCodec,
};
use stationery_core::config::AppConfig;
use stationery_core::result::AppResult;
use stationery_store::{IdentityRepository, RoleRepository};

use crate::policy::default_policy;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks, and none
/// of them is mutated after startup except the repositories' contents.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// When the process started serving
    pub started_at: DateTime<Utc>,

    // ── Auth ─────────────────────────────────────────────────
    /// Token signing and verification
    pub token_codec: Arc<TokenCodec>,
    /// Per-request identity resolution
    pub request_gate: Arc<RequestGate>,
    /// Route access policy
    pub access_policy: Arc<AccessPolicyEvaluator>,
    /// Login credential checks
    pub authenticator: Arc<Authenticator>,
    /// Self-service registration
    pub registrar: Arc<IdentityRegistrar>,

    // ── Repositories ─────────────────────────────────────────
    /// Identity (credential) store
    pub identities: Arc<IdentityRepository>,
    /// Role table
    pub roles: Arc<RoleRepository>,
}

impl AppState {
    /// Wire the auth components over existing repositories.
    pub fn new(
        config: AppConfig,
        roles: Arc<RoleRepository>,
        identities: Arc<IdentityRepository>,
    ) -> AppResult<Self> {
        let hasher = PasswordHasher::new();
        let token_codec = Arc::new(TokenCodec::new(&config.auth)?);
        let loader = Arc::new(StoreIdentityLoader::new(identities.clone()));
        let request_gate = Arc::new(RequestGate::new(token_codec.clone(), loader));
        let access_policy = Arc::new(AccessPolicyEvaluator::new(default_policy()?));
        let authenticator = Arc::new(Authenticator::new(identities.clone(), hasher.clone())?);
        let registrar = Arc::new(IdentityRegistrar::from_config(
            identities.clone(),
            hasher,
            &config.auth,
        )?);

        Ok(Self {
            config: Arc::new(config),
            started_at: Utc::now(),
            token_codec,
            request_gate,
            access_policy,
            authenticator,
            registrar,
            identities,
            roles,
        })
    }

    /// Build the role table and an empty identity store from configuration.
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let roles = Arc::new(RoleRepository::from_config(&config.auth)?);
        let identities = Arc::new(IdentityRepository::new(roles.clone()));
        Self::new(config, roles, identities)
    }
}
