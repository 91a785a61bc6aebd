//! Token failure taxonomy.

use jsonwebtoken::errors::{Error as JwtError, ErrorKind as JwtErrorKind};
use thiserror::Error;

/// Why a token was rejected.
///
/// Only ever logged or shown to operators; HTTP callers see a single
/// "invalid token" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a structurally valid token (bad segments, base64, JSON or claims).
    #[error("malformed token")]
    Malformed,
    /// Signature does not match the configured secret.
    #[error("signature mismatch")]
    InvalidSignature,
    /// Header names an algorithm other than the configured one.
    #[error("unexpected signing algorithm")]
    UnknownAlgorithm,
    /// Expiry is at or before the evaluation time.
    #[error("token expired")]
    Expired,
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err.kind() {
            JwtErrorKind::InvalidSignature => Self::InvalidSignature,
            JwtErrorKind::InvalidAlgorithm | JwtErrorKind::InvalidAlgorithmName => {
                Self::UnknownAlgorithm
            }
            JwtErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed,
        }
    }
}
