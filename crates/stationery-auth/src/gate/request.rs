//! The request gate: header in, security context out.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::bearer::extract_bearer;
use super::context::SecurityContext;
use crate::authn::IdentityLoader;
use crate::jwt::TokenCodec;

/// Turns an Authorization header into a [`SecurityContext`].
///
/// Never rejects: every failure yields an anonymous context and the access
/// policy decides what that means for the route. Holds no per-request state.
#[derive(Clone)]
pub struct RequestGate {
    codec: Arc<TokenCodec>,
    loader: Arc<dyn IdentityLoader>,
}

impl std::fmt::Debug for RequestGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestGate")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl RequestGate {
    pub fn new(codec: Arc<TokenCodec>, loader: Arc<dyn IdentityLoader>) -> Self {
        Self { codec, loader }
    }

    /// Resolve the caller for one request evaluated at `now`.
    pub async fn authenticate(&self, authorization: Option<&str>, now: DateTime<Utc>) -> SecurityContext {
        let Some(token) = extract_bearer(authorization) else {
            return SecurityContext::anonymous();
        };

        let claims = match self.codec.verify(token, now) {
            Ok(claims) => claims,
            Err(reason) => {
                debug!(%reason, "Bearer token rejected");
                return SecurityContext::anonymous();
            }
        };

        let Some(identity) = self.loader.load_by_identifier(&claims.sub).await else {
            debug!(subject = %claims.sub, "Token subject no longer resolves");
            return SecurityContext::anonymous();
        };

        SecurityContext::authenticated(identity.identifier, identity.roles)
    }
}
