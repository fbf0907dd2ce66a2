mod in_memory_cache_store;

pub use in_memory_cache_store::InMemoryCacheStore;
