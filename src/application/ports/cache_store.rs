use async_trait::async_trait;

use crate::domain::CacheEntry;

/// Write-only sink for finished simplifications.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn put(&self, entry: CacheEntry) -> Result<(), CacheStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CacheStoreError {
    #[error("cache write failed: {0}")]
    WriteFailed(String),
}
