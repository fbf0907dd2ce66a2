mod access_middleware;
mod access_policy;

pub use access_middleware::{EXTENSION_TOKEN_HEADER, access_guard_middleware};
pub use access_policy::{AccessPolicy, hash_token};
