//! JWT token verification against an explicit evaluation time.

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, Validation, decode};

use stationery_core::config::AuthConfig;

use super::SIGNING_ALGORITHM;
use super::claims::TokenClaims;
use super::error::TokenError;

/// Validates access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.jwt_secret.as_bytes())
    }

    /// Creates a decoder from a raw secret.
    pub fn from_secret(secret: &[u8]) -> Self {
        // Only the configured algorithm is accepted; the header is never trusted.
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        // Expiry is checked below against the caller's clock, with no leeway.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Decodes a token and checks it is still valid at `now`.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?.claims;

        if claims.exp <= claims.iat {
            return Err(TokenError::Malformed);
        }
        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
