//! Token store over the cache service.
//!
//! One key per live session: `token:{session_id}` → raw signed token
//! string, with the TTL equal to the configured access-token lifetime.
//! Expiry is enforced by the store itself; this code never compares
//! timestamps.
//!
//! Revoking every session of a subject walks the whole `token:*`
//! keyspace, decoding each stored token to compare its subject — an
//! O(total live sessions across all users) operation. A per-user index
//! of session ids would reduce that to O(sessions-of-user); see
//! DESIGN.md.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use adminhub_cache::keys;
use adminhub_cache::provider::CacheManager;
use adminhub_core::config::auth::AuthConfig;
use adminhub_core::error::{AppError, ErrorKind};
use adminhub_core::result::AppResult;
use adminhub_core::traits::cache::CacheProvider;

use crate::jwt::TokenDecoder;

/// Stores signed session tokens in the cache service.
#[derive(Debug, Clone)]
pub struct TokenStore {
    /// Cache manager handle.
    cache: Arc<CacheManager>,
    /// Decoder used to read the subject out of stored tokens.
    decoder: Arc<TokenDecoder>,
    /// TTL applied to every stored token.
    token_ttl: Duration,
}

impl TokenStore {
    /// Create a new token store.
    pub fn new(cache: Arc<CacheManager>, decoder: Arc<TokenDecoder>, config: &AuthConfig) -> Self {
        Self {
            cache,
            decoder,
            token_ttl: Duration::from_secs(config.access_ttl_seconds()),
        }
    }

    /// Map a cache failure to `StoreUnavailable`.
    ///
    /// Token operations are security-sensitive; callers must see store
    /// outages loudly instead of a generic cache error.
    fn store_err(operation: &str, e: AppError) -> AppError {
        AppError::with_source(
            ErrorKind::StoreUnavailable,
            format!("Token store unreachable during {operation}"),
            e,
        )
    }

    /// Persist a session's token under `token:{session_id}`.
    pub async fn put(&self, session_id: Uuid, token: &str) -> AppResult<()> {
        self.cache
            .set(&keys::session_token(session_id), token, self.token_ttl)
            .await
            .map_err(|e| Self::store_err("put", e))
    }

    /// Fetch the stored token for a session, if it is still live.
    pub async fn get(&self, session_id: Uuid) -> AppResult<Option<String>> {
        self.cache
            .get(&keys::session_token(session_id))
            .await
            .map_err(|e| Self::store_err("get", e))
    }

    /// Remove a session's token. Removing an absent entry is not an error.
    pub async fn delete(&self, session_id: Uuid) -> AppResult<()> {
        self.cache
            .delete(&keys::session_token(session_id))
            .await
            .map_err(|e| Self::store_err("delete", e))
    }

    /// List every stored token key.
    pub async fn scan(&self) -> AppResult<Vec<String>> {
        self.cache
            .scan_keys(keys::session_token_pattern())
            .await
            .map_err(|e| Self::store_err("scan", e))
    }

    /// Revoke every live session belonging to `subject`.
    ///
    /// Walks all stored tokens, decodes each, and deletes those whose
    /// subject matches. Entries that fail to decode (tampered, or expired
    /// between scan and read) are skipped: the store will drop them on
    /// its own. Returns the number of sessions revoked.
    ///
    /// The walk is resumable: keys deleted before an interruption stay
    /// deleted, and a retry simply scans again.
    pub async fn revoke_all(&self, subject: Uuid) -> AppResult<u64> {
        let keys = self.scan().await?;

        let mut revoked = 0u64;
        for key in keys {
            let Some(stored) = self.cache.get(&key).await.map_err(|e| Self::store_err("get", e))?
            else {
                continue;
            };
            let Ok(claims) = self.decoder.decode(&stored) else {
                continue;
            };
            if claims.sub == subject {
                self.cache
                    .delete(&key)
                    .await
                    .map_err(|e| Self::store_err("delete", e))?;
                revoked += 1;
            }
        }

        if revoked > 0 {
            debug!(subject = %subject, revoked, "Revoked stored sessions");
        }
        Ok(revoked)
    }
}
