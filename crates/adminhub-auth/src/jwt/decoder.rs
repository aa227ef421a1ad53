//! Local signed-token validation.
//!
//! Decoding checks the signature and expiry only — a cheap, in-process
//! operation. Whether the session is still live in the token store is a
//! separate, network-bound check owned by the session manager.

use jsonwebtoken::{DecodingKey, Validation, decode};

use adminhub_core::config::auth::AuthConfig;
use adminhub_core::error::AppError;

use super::claims::Claims;
use super::parse_algorithm;

/// Validates signed session tokens.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = parse_algorithm(&config.jwt_algorithm)?;
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Decodes a token string, verifying signature and expiry.
    ///
    /// The error messages distinguish causes for server-side logs only;
    /// callers present a single generic message to clients.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::TokenEncoder;
    use adminhub_core::error::ErrorKind;
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".into(),
            jwt_algorithm: "HS256".into(),
            access_ttl_minutes: 15,
            password_min_length: 8,
        }
    }

    #[test]
    fn test_round_trip() {
        let encoder = TokenEncoder::new(&config()).unwrap();
        let decoder = TokenDecoder::new(&config()).unwrap();

        let subject = Uuid::new_v4();
        let (token, claims) = encoder.sign(subject).unwrap();
        let decoded = decoder.decode(&token).unwrap();

        assert_eq!(decoded, claims);
        assert_eq!(decoded.sub, subject);
        assert!(!decoded.is_expired());
    }

    #[test]
    fn test_each_token_gets_fresh_session_id() {
        let encoder = TokenEncoder::new(&config()).unwrap();
        let subject = Uuid::new_v4();
        let (_, first) = encoder.sign(subject).unwrap();
        let (_, second) = encoder.sign(subject).unwrap();
        assert_ne!(first.session_id, second.session_id);
    }

    #[test]
    fn test_garbage_rejected() {
        let decoder = TokenDecoder::new(&config()).unwrap();
        let err = decoder.decode("not-a-token").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = TokenEncoder::new(&config()).unwrap();
        let (token, _) = encoder.sign(Uuid::new_v4()).unwrap();

        let mut other = config();
        other.jwt_secret = "a-different-secret".into();
        let decoder = TokenDecoder::new(&other).unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_unsupported_algorithm_rejected() {
        let mut bad = config();
        bad.jwt_algorithm = "RS256".into();
        let err = TokenEncoder::new(&bad).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
