// Time-bounded typed cache over a CacheStore.
// Entries are {data, timestamp} JSON envelopes that expire after a fixed window.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::error::Result;

use super::store::CacheStore;

/// How long an entry stays fresh: 10 minutes.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(10 * 60);

/// Wrapper for cached data with its capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached, in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl<T> CachedData<T> {
    /// Create an entry captured at `now`.
    pub fn captured_at(data: T, now: DateTime<Utc>) -> Self {
        Self {
            data,
            timestamp: now.timestamp_millis(),
        }
    }

    /// An entry is fresh while its age is strictly below `window`.
    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        let age_ms = i128::from(now.timestamp_millis()) - i128::from(self.timestamp);
        age_ms < window.as_millis() as i128
    }
}

/// Read-through cache view of a [`CacheStore`].
#[derive(Clone)]
pub struct TtlCache {
    store: Arc<dyn CacheStore>,
    window: Duration,
}

impl TtlCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self::with_window(store, FRESHNESS_WINDOW)
    }

    pub fn with_window(store: Arc<dyn CacheStore>, window: Duration) -> Self {
        Self { store, window }
    }

    /// Fresh payload stored under `key`, if any.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.get_at(key, Utc::now())
    }

    /// Like [`get`](Self::get) with an explicit clock.
    ///
    /// Malformed entries are reported as absent. Only storage failures error.
    pub fn get_at<T: DeserializeOwned>(&self, key: &str, now: DateTime<Utc>) -> Result<Option<T>> {
        let Some(contents) = self.store.read(key)? else {
            return Ok(None);
        };

        let cached: CachedData<T> = match serde_json::from_str(&contents) {
            Ok(cached) => cached,
            Err(e) => {
                warn!(key, error = %e, "ignoring malformed cache entry");
                return Ok(None);
            }
        };

        if cached.is_fresh(now, self.window) {
            Ok(Some(cached.data))
        } else {
            debug!(key, timestamp = cached.timestamp, "cache entry is stale");
            Ok(None)
        }
    }

    /// Overwrite the entry for `key`, stamped with the current time.
    pub fn set<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        self.set_at(key, data, Utc::now())
    }

    /// Like [`set`](Self::set) with an explicit clock.
    pub fn set_at<T: Serialize>(&self, key: &str, data: &T, now: DateTime<Utc>) -> Result<()> {
        let cached = CachedData::captured_at(data, now);
        let json = serde_json::to_string(&cached)?;
        self.store.write(key, &json)
    }

    /// Remove the entry for `key` outright.
    pub fn evict(&self, key: &str) -> Result<()> {
        self.store.remove(key)
    }
}
