//! JWT token encoding, decoding, and claims management.

pub mod claims;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use claims::{IssuedToken, TokenClaims};
pub use codec::{TokenCodec, TokenValidation};
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
pub use error::TokenError;

use jsonwebtoken::Algorithm;

/// The only algorithm tokens are signed with or accepted under.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS512;
