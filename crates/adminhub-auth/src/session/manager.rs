//! The session token state machine.
//!
//! A token moves through `Issued → Active → {Revoked | Expired}`.
//! `Issued` and `Active` are indistinguishable from outside (both
//! validate), `Revoked` is an explicit delete from the token store, and
//! `Expired` is a passive TTL lapse the store enforces by itself.
//!
//! Issuing never touches previously issued tokens; callers that want
//! single-active-session semantics sequence `revoke_all` strictly before
//! `issue`, which is exactly what the auth gateway does at login.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use adminhub_core::result::AppResult;

use crate::jwt::{TokenDecoder, TokenEncoder};
use crate::token::TokenStore;

/// A freshly minted, persisted session token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The raw signed token string.
    pub token: String,
    /// The session identifier embedded in the token.
    pub session_id: Uuid,
    /// When the token (and its store entry) expires.
    pub expires_at: DateTime<Utc>,
}

/// Issues, validates, and revokes session tokens against the token store.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Token signer.
    encoder: Arc<TokenEncoder>,
    /// Token verifier.
    decoder: Arc<TokenDecoder>,
    /// Cache-backed token persistence.
    store: Arc<TokenStore>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        encoder: Arc<TokenEncoder>,
        decoder: Arc<TokenDecoder>,
        store: Arc<TokenStore>,
    ) -> Self {
        Self {
            encoder,
            decoder,
            store,
        }
    }

    /// Mints a new signed token for `subject` and persists it.
    pub async fn issue(&self, subject: Uuid) -> AppResult<IssuedToken> {
        let (token, claims) = self.encoder.sign(subject)?;
        self.store.put(claims.session_id, &token).await?;

        info!(subject = %subject, session_id = %claims.session_id, "Session token issued");
        Ok(IssuedToken {
            token,
            session_id: claims.session_id,
            expires_at: claims.expires_at(),
        })
    }

    /// Checks whether `token` is the live stored token for `subject`.
    ///
    /// Performs exactly one store round-trip. A malformed token, an
    /// expired token, and a superseded-but-well-formed token all come
    /// back `false` — callers cannot tell the cases apart.
    pub async fn validate(&self, subject: Uuid, token: &str) -> AppResult<bool> {
        let claims = match self.decoder.decode(token) {
            Ok(claims) => claims,
            Err(_) => return Ok(false),
        };
        if claims.sub != subject {
            warn!(subject = %subject, "Token subject mismatch");
            return Ok(false);
        }

        match self.store.get(claims.session_id).await? {
            Some(stored) => Ok(stored == token),
            None => Ok(false),
        }
    }

    /// Revokes the session carried by `token` (the logout path).
    ///
    /// Idempotent: revoking an already-absent or undecodable token is
    /// not an error.
    pub async fn revoke(&self, token: &str) -> AppResult<()> {
        if let Ok(claims) = self.decoder.decode(token) {
            self.store.delete(claims.session_id).await?;
            info!(subject = %claims.sub, session_id = %claims.session_id, "Session revoked");
        }
        Ok(())
    }

    /// Revokes every live session of `subject`. Used at login to enforce
    /// the single-active-session policy.
    pub async fn revoke_all(&self, subject: Uuid) -> AppResult<u64> {
        self.store.revoke_all(subject).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminhub_cache::memory::MemoryCacheProvider;
    use adminhub_cache::provider::CacheManager;
    use adminhub_core::config::auth::AuthConfig;
    use adminhub_core::config::cache::MemoryCacheConfig;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "session-manager-test-secret".into(),
            jwt_algorithm: "HS256".into(),
            access_ttl_minutes: 15,
            password_min_length: 8,
        }
    }

    fn manager() -> SessionManager {
        let config = config();
        let cache = Arc::new(CacheManager::from_provider(Arc::new(
            MemoryCacheProvider::new(&MemoryCacheConfig::default(), 300),
        )));
        let encoder = Arc::new(TokenEncoder::new(&config).unwrap());
        let decoder = Arc::new(TokenDecoder::new(&config).unwrap());
        let store = Arc::new(TokenStore::new(cache, Arc::clone(&decoder), &config));
        SessionManager::new(encoder, decoder, store)
    }

    #[tokio::test]
    async fn test_issued_token_validates() {
        let manager = manager();
        let subject = Uuid::new_v4();

        let issued = manager.issue(subject).await.unwrap();
        assert!(manager.validate(subject, &issued.token).await.unwrap());
    }

    #[tokio::test]
    async fn test_garbage_token_fails_validation() {
        let manager = manager();
        assert!(!manager.validate(Uuid::new_v4(), "garbage").await.unwrap());
    }

    #[tokio::test]
    async fn test_token_fails_for_wrong_subject() {
        let manager = manager();
        let subject = Uuid::new_v4();
        let issued = manager.issue(subject).await.unwrap();

        assert!(!manager.validate(Uuid::new_v4(), &issued.token).await.unwrap());
    }

    #[tokio::test]
    async fn test_sequential_logins_leave_exactly_one_live_token() {
        let manager = manager();
        let subject = Uuid::new_v4();

        let first = manager.issue(subject).await.unwrap();
        manager.revoke_all(subject).await.unwrap();
        let second = manager.issue(subject).await.unwrap();

        assert!(!manager.validate(subject, &first.token).await.unwrap());
        assert!(manager.validate(subject, &second.token).await.unwrap());
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let manager = manager();
        let subject = Uuid::new_v4();
        let issued = manager.issue(subject).await.unwrap();

        manager.revoke(&issued.token).await.unwrap();
        assert!(!manager.validate(subject, &issued.token).await.unwrap());

        // Second revoke of the same token is a no-op.
        manager.revoke(&issued.token).await.unwrap();
        // And revoking garbage is not an error either.
        manager.revoke("garbage").await.unwrap();
    }

    #[tokio::test]
    async fn test_revoke_all_spares_other_subjects() {
        let manager = manager();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let alice_first = manager.issue(alice).await.unwrap();
        let alice_second = manager.issue(alice).await.unwrap();
        let bob_token = manager.issue(bob).await.unwrap();

        let revoked = manager.revoke_all(alice).await.unwrap();
        assert_eq!(revoked, 2);

        assert!(!manager.validate(alice, &alice_first.token).await.unwrap());
        assert!(!manager.validate(alice, &alice_second.token).await.unwrap());
        assert!(manager.validate(bob, &bob_token.token).await.unwrap());
    }
}
