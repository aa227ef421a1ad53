//! Signed session token encoding and decoding.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::TokenDecoder;
pub use encoder::TokenEncoder;

use jsonwebtoken::Algorithm;

use adminhub_core::error::AppError;

/// Resolve the configured signing algorithm name.
pub(crate) fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    match name {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::configuration(format!(
            "Unsupported JWT algorithm: '{other}'. Supported: HS256, HS384, HS512"
        ))),
    }
}
