// Cache module for persistent key-value caching.
// Keeps GitHub results across restarts so the API is not hit on every start.

pub mod paths;
pub mod store;
pub mod ttl;

pub use store::{CacheStore, FileStore, MemoryStore};
pub use ttl::{CachedData, FRESHNESS_WINDOW, TtlCache};
