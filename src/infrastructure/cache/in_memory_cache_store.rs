use async_trait::async_trait;
use moka::future::Cache;

use crate::application::ports::{CacheStore, CacheStoreError};
use crate::domain::CacheEntry;

/// In-process cache store. Entries never expire and are never evicted.
#[derive(Clone)]
pub struct InMemoryCacheStore {
    entries: Cache<String, CacheEntry>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
        }
    }

    pub async fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.get(key).await
    }

    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn put(&self, entry: CacheEntry) -> Result<(), CacheStoreError> {
        if entry.key.is_empty() {
            return Err(CacheStoreError::WriteFailed("empty key".to_string()));
        }

        tracing::debug!(audience = %entry.audience, "Caching simplification");
        self.entries.insert(entry.key.clone(), entry).await;
        Ok(())
    }
}
