//! Caching layer for remote catalog fetches.
//!
//! Catalog documents change rarely compared to how often searches run,
//! and every reload would otherwise re-fetch and re-validate the whole
//! payload. A small TTL cache keyed by source URL bounds fetch traffic
//! while keeping reloads cheap.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::catalog::{CatalogClient, CatalogError, convert_catalog};
use crate::domain::Offering;

/// Cached, converted catalog entry.
type CatalogEntry = Arc<Vec<Offering>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 16,
        }
    }
}

/// Catalog client with caching.
///
/// Wraps a [`CatalogClient`] and caches converted catalogs by URL.
pub struct CachedCatalogClient {
    client: CatalogClient,
    catalogs: MokaCache<String, CatalogEntry>,
}

impl CachedCatalogClient {
    /// Create a new cached client.
    pub fn new(client: CatalogClient, config: &CacheConfig) -> Self {
        let catalogs = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, catalogs }
    }

    /// Get the converted catalog for a URL, using the cache if fresh.
    pub async fn get_catalog(&self, url: &str) -> Result<CatalogEntry, CatalogError> {
        if let Some(hit) = self.catalogs.get(url).await {
            return Ok(hit);
        }

        let dtos = self.client.fetch(url).await?;
        let entry: CatalogEntry = Arc::new(convert_catalog(&dtos));

        self.catalogs.insert(url.to_string(), entry.clone()).await;
        Ok(entry)
    }

    /// Number of cached catalogs (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.catalogs.entry_count()
    }

    /// Drop all cached entries, forcing the next get to re-fetch.
    pub fn invalidate_all(&self) {
        self.catalogs.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogClientConfig;

    #[test]
    fn config_defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 16);
    }

    #[tokio::test]
    async fn starts_empty() {
        let client = CatalogClient::new(CatalogClientConfig::default()).unwrap();
        let cached = CachedCatalogClient::new(client, &CacheConfig::default());
        assert_eq!(cached.entry_count(), 0);
    }
}
