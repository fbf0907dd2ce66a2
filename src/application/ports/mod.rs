mod cache_store;
mod file_loader;
mod llm_client;

pub use cache_store::{CacheStore, CacheStoreError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
