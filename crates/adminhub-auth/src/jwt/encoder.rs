//! Signed token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use adminhub_core::config::auth::AuthConfig;
use adminhub_core::error::AppError;

use super::claims::Claims;
use super::parse_algorithm;

/// Creates signed session tokens.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// JWT header carrying the configured algorithm.
    header: Header,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .finish()
    }
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = parse_algorithm(&config.jwt_algorithm)?;
        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            header: Header::new(algorithm),
            access_ttl_minutes: config.access_ttl_minutes as i64,
        })
    }

    /// Mints a new signed token for the given subject.
    ///
    /// Each call produces a fresh `session_id`; issuing has no effect on
    /// any previously issued token.
    pub fn sign(&self, subject: Uuid) -> Result<(String, Claims), AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject,
            exp: (now + chrono::Duration::minutes(self.access_ttl_minutes)).timestamp(),
            session_id: Uuid::new_v4(),
        };

        let token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok((token, claims))
    }
}
