//! Authorization header parsing.

/// Scheme prefix expected on the Authorization header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Returns the token from an `Authorization: Bearer <token>` header value.
///
/// `None` for a missing header, another scheme, or an empty token.
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix(BEARER_PREFIX)?.trim();
    (!token.is_empty()).then_some(token)
}
