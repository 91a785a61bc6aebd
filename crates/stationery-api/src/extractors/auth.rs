//! `CurrentIdentity` extractor: the principal the request gate bound.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use stationery_auth::SecurityContext;
use stationery_auth::gate::Principal;
use stationery_core::error::AppError;

use crate::error::ApiError;

/// The authenticated caller. Rejects with 401 when the request is anonymous.
///
/// Reads the `SecurityContext` from request extensions; it never looks at
/// the Authorization header itself.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Principal);

impl std::ops::Deref for CurrentIdentity {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SecurityContext>()
            .and_then(SecurityContext::principal)
            .cloned()
            .map(CurrentIdentity)
            .ok_or_else(|| AppError::authentication("Authentication required").into())
    }
}
