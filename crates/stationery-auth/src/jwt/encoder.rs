//! JWT token creation with a fixed signing algorithm and TTL.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use stationery_core::config::AuthConfig;
use stationery_core::error::AppError;

use super::SIGNING_ALGORITHM;
use super::claims::{IssuedToken, TokenClaims};

/// Creates signed access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Header naming the signing algorithm.
    header: Header,
    /// Token lifetime.
    ttl: TimeDelta,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("algorithm", &self.header.alg)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let ttl = ttl_from_seconds(config.jwt_ttl_seconds)?;
        Ok(Self::from_secret(config.jwt_secret.as_bytes(), ttl))
    }

    /// Creates an encoder from a raw secret and lifetime.
    pub fn from_secret(secret: &[u8], ttl: TimeDelta) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(SIGNING_ALGORITHM),
            ttl,
        }
    }

    /// Returns the configured token lifetime.
    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Signs a token for `subject`, issued at `now` and expiring at `now + ttl`.
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            AppError::configuration(format!(
                "Token TTL {}s overflows the expiry time",
                self.ttl.num_seconds()
            ))
        })?;
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}

pub(crate) fn ttl_from_seconds(seconds: u64) -> Result<TimeDelta, AppError> {
    i64::try_from(seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .filter(|ttl| *ttl > TimeDelta::zero())
        .ok_or_else(|| AppError::configuration(format!("Token TTL out of range: {seconds}s")))
}
