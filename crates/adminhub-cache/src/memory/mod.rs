//! In-memory cache implementation using the moka crate.
//!
//! Used for development and tests; per-entry TTLs are honored through a
//! moka expiry policy so the store enforces expiry exactly like Redis.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use tracing::debug;

use adminhub_core::config::cache::MemoryCacheConfig;
use adminhub_core::result::AppResult;
use adminhub_core::traits::cache::CacheProvider;

/// Cached value plus its requested lifetime.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expiry policy reading each entry's own TTL.
struct PerEntryExpiry;

impl Expiry<String, Entry> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-memory cache provider using moka.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, Entry>,
    /// Default TTL for entries.
    default_ttl: Duration,
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig, default_ttl_seconds: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(PerEntryExpiry)
            .build();

        Self {
            cache,
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }

    /// Convert a glob pattern to its prefix form.
    ///
    /// Moka has no pattern scanning; every pattern the application uses is
    /// a `prefix*` glob, so prefix filtering over an iteration is enough.
    fn pattern_prefix(pattern: &str) -> &str {
        pattern.trim_end_matches('*')
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.cache
            .insert(
                key.to_string(),
                Entry {
                    value: value.to_string(),
                    ttl,
                },
            )
            .await;
        Ok(())
    }

    async fn set_default(&self, key: &str, value: &str) -> AppResult<()> {
        self.set(key, value, self.default_ttl).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn scan_keys(&self, pattern: &str) -> AppResult<Vec<String>> {
        let prefix = Self::pattern_prefix(pattern);
        let mut keys: Vec<String> = self
            .cache
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.as_ref().clone())
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn delete_pattern(&self, pattern: &str) -> AppResult<u64> {
        let keys = self.scan_keys(pattern).await?;
        let count = keys.len() as u64;

        for key in keys {
            self.cache.invalidate(&key).await;
        }

        debug!(pattern, count, "Deleted keys matching pattern");
        Ok(count)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.cache.invalidate_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MemoryCacheProvider {
        MemoryCacheProvider::new(&MemoryCacheConfig::default(), 300)
    }

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = provider();
        cache.set("k1", "v1", Duration::from_secs(60)).await.unwrap();
        assert_eq!(cache.get("k1").await.unwrap(), Some("v1".to_string()));

        cache.delete("k1").await.unwrap();
        assert_eq!(cache.get("k1").await.unwrap(), None);

        // Deleting an absent key is not an error.
        cache.delete("k1").await.unwrap();
    }

    #[tokio::test]
    async fn test_scan_keys_matches_prefix_only() {
        let cache = provider();
        cache.set("token:a", "1", Duration::from_secs(60)).await.unwrap();
        cache.set("token:b", "2", Duration::from_secs(60)).await.unwrap();
        cache.set("other:c", "3", Duration::from_secs(60)).await.unwrap();

        let keys = cache.scan_keys("token:*").await.unwrap();
        assert_eq!(keys, vec!["token:a".to_string(), "token:b".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_pattern() {
        let cache = provider();
        cache.set("token:a", "1", Duration::from_secs(60)).await.unwrap();
        cache.set("token:b", "2", Duration::from_secs(60)).await.unwrap();
        cache.set("other:c", "3", Duration::from_secs(60)).await.unwrap();

        let deleted = cache.delete_pattern("token:*").await.unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(cache.get("other:c").await.unwrap(), Some("3".to_string()));
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = provider();
        cache
            .set("gone", "x", Duration::from_millis(50))
            .await
            .unwrap();
        assert_eq!(cache.get("gone").await.unwrap(), Some("x".to_string()));

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(cache.get("gone").await.unwrap(), None);
    }
}
