//! # stationery-auth
//!
//! Stateless authentication and route-level authorization for the
//! stationery backend.
//!
//! ## Modules
//!
//! - `jwt`: HS512 token issuing and verification against an explicit clock
//! - `password`: Argon2id secret hashing and verification
//! - `authn`: credential checks and per-request identity loading
//! - `gate`: bearer extraction and the per-request security context
//! - `rbac`: route pattern table and access policy evaluation
//! - `registration`: self-service identity registration

pub mod authn;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod rbac;
pub mod registration;

pub use authn::{
    Authenticator, AuthnError, CredentialStore, IdentityLoader, IdentityRegistry, LoadedIdentity,
    StoreIdentityLoader,
};
pub use gate::{RequestGate, SecurityContext};
pub use jwt::{IssuedToken, TokenClaims, TokenCodec, TokenError, TokenValidation};
pub use password::PasswordHasher;
pub use rbac::{AccessDenial, AccessPolicy, AccessPolicyEvaluator, AccessRule, RoutePattern};
pub use registration::IdentityRegistrar;
