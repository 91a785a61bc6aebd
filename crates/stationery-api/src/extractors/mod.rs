//! Custom Axum extractors.

pub mod auth;
pub mod json;

pub use auth::CurrentIdentity;
pub use json::ValidatedJson;
