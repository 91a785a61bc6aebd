//! Issue/parse facade over the encoder and decoder.

use chrono::{DateTime, TimeDelta, Utc};

use stationery_core::config::AuthConfig;
use stationery_core::error::AppError;

use super::claims::{IssuedToken, TokenClaims};
use super::decoder::JwtDecoder;
use super::encoder::JwtEncoder;
use super::error::TokenError;

/// Outcome of [`TokenCodec::parse`]. The failure reason is deliberately
/// absent; use [`TokenCodec::verify`] where it is needed for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValidation {
    /// Signature, algorithm and expiry all check out.
    Valid(TokenClaims),
    /// Rejected for any reason.
    Invalid,
}

impl TokenValidation {
    /// Whether the token was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The subject of an accepted token.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::Valid(claims) => Some(&claims.sub),
            Self::Invalid => None,
        }
    }

    /// Consume into the decoded claims, if accepted.
    pub fn into_claims(self) -> Option<TokenClaims> {
        match self {
            Self::Valid(claims) => Some(claims),
            Self::Invalid => None,
        }
    }
}

/// Signs and verifies access tokens with one shared secret.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenCodec {
    /// Build from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        Ok(Self {
            encoder: JwtEncoder::new(config)?,
            decoder: JwtDecoder::new(config),
        })
    }

    /// Build from a raw secret and lifetime.
    pub fn from_secret(secret: &[u8], ttl: TimeDelta) -> Self {
        Self {
            encoder: JwtEncoder::from_secret(secret, ttl),
            decoder: JwtDecoder::from_secret(secret),
        }
    }

    /// Token lifetime.
    pub fn ttl(&self) -> TimeDelta {
        self.encoder.ttl()
    }

    /// Sign a token for `subject` issued at `now`.
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        self.encoder.issue(subject, now)
    }

    /// Validate `token` at `now`. Never fails; every rejection is `Invalid`.
    pub fn parse(&self, token: &str, now: DateTime<Utc>) -> TokenValidation {
        match self.decoder.verify(token, now) {
            Ok(claims) => TokenValidation::Valid(claims),
            Err(reason) => {
                tracing::debug!(%reason, "Token rejected");
                TokenValidation::Invalid
            }
        }
    }

    /// Validate `token` at `now`, keeping the rejection reason.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        self.decoder.verify(token, now)
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    use super::*;

    const SECRET: &[u8] = b"letras-y-papeles-test-secret";
    const TTL: i64 = 3600;

    fn codec() -> TokenCodec {
        TokenCodec::from_secret(SECRET, TimeDelta::seconds(TTL))
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    const T: i64 = 1_760_000_000;

    #[test]
    fn test_round_trip_within_window() {
        let codec = codec();
        let token = codec.issue("mgr@example.com", at(T)).unwrap().token;

        for offset in [0, 1, TTL / 2, TTL - 1] {
            let result = codec.parse(&token, at(T + offset));
            assert_eq!(result.subject(), Some("mgr@example.com"), "offset {offset}");
        }

        let claims = codec.parse(&token, at(T)).into_claims().unwrap();
        assert_eq!(claims.iat, T);
        assert_eq!(claims.exp, T + TTL);
    }

    #[test]
    fn test_expiry_boundary() {
        let codec = codec();
        let token = codec.issue("mgr@example.com", at(T)).unwrap().token;

        assert!(codec.parse(&token, at(T + TTL - 1)).is_valid());
        assert_eq!(codec.parse(&token, at(T + TTL)), TokenValidation::Invalid);
        assert_eq!(
            codec.verify(&token, at(T + TTL + 1)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_any_signature_change_is_rejected() {
        let codec = codec();
        let token = codec.issue("mgr@example.com", at(T)).unwrap().token;
        let sig_start = token.rfind('.').unwrap() + 1;

        for i in sig_start..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();
            assert!(!codec.parse(&tampered, at(T)).is_valid(), "position {i}");
        }
    }

    #[test]
    fn test_rejects_other_hmac_algorithm() {
        let claims = TokenClaims {
            sub: "mgr@example.com".to_string(),
            iat: T,
            exp: T + TTL,
        };
        let hs256 = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(
            codec().verify(&hs256, at(T)),
            Err(TokenError::UnknownAlgorithm)
        );
    }

    #[test]
    fn test_rejects_unsigned_token() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(
            format!(r#"{{"sub":"mgr@example.com","iat":{T},"exp":{}}}"#, T + TTL).as_bytes(),
        );
        let token = format!("{header}.{payload}.");

        assert!(!codec().parse(&token, at(T)).is_valid());
    }

    #[test]
    fn test_rejects_foreign_key() {
        let foreign = TokenCodec::from_secret(b"someone-else", TimeDelta::seconds(TTL));
        let token = foreign.issue("mgr@example.com", at(T)).unwrap().token;

        assert_eq!(
            codec().verify(&token, at(T)),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_rejects_malformed() {
        let codec = codec();
        for garbage in ["", "abc", "a.b", "a.b.c", "....."] {
            assert_eq!(
                codec.verify(garbage, at(T)),
                Err(TokenError::Malformed),
                "{garbage:?}"
            );
        }
    }

    #[test]
    fn test_rejects_missing_expiry() {
        let token = encode(
            &Header::new(Algorithm::HS512),
            &serde_json::json!({ "sub": "mgr@example.com", "iat": T }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(codec().verify(&token, at(T)), Err(TokenError::Malformed));
    }

    #[test]
    fn test_rejects_inverted_window() {
        let token = encode(
            &Header::new(Algorithm::HS512),
            &serde_json::json!({ "sub": "mgr@example.com", "iat": T, "exp": T }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(codec().verify(&token, at(T - 10)), Err(TokenError::Malformed));
    }
}
