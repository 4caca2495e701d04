// Cached load/refresh state machine for the profile sidebar.
// Serves both results from the cache when fresh, otherwise fetches and stores them.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::{Mutex, watch};
use tracing::{debug, error, info};

use crate::cache::TtlCache;
use crate::error::Result;

use super::fetcher::StatsSource;
use super::types::{LanguageShare, ProfileStats};

pub const STATS_CACHE_KEY: &str = "github_stats_cache";
pub const LANGUAGES_CACHE_KEY: &str = "github_languages_cache";

pub const LOAD_ERROR: &str = "Failed to load GitHub data";
pub const REFRESH_ERROR: &str = "Failed to refresh GitHub data";

/// Stats and languages from one completed cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub stats: ProfileStats,
    pub languages: Vec<LanguageShare>,
}

/// State of the sidebar data.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsState {
    /// A cycle is running. `last` is what was displayed before it started.
    Loading { last: Option<Snapshot> },
    Ready(Snapshot),
    Error {
        message: String,
        last: Option<Snapshot>,
    },
}

impl StatsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, StatsState::Loading { .. })
    }

    /// Data to display, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            StatsState::Ready(snapshot) => Some(snapshot),
            StatsState::Loading { last } | StatsState::Error { last, .. } => last.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            StatsState::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Flattened state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub stats: Option<ProfileStats>,
    pub languages: Vec<LanguageShare>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl From<&StatsState> for StatsView {
    fn from(state: &StatsState) -> Self {
        let snapshot = state.snapshot();
        Self {
            stats: snapshot.map(|s| s.stats),
            languages: snapshot.map(|s| s.languages.clone()).unwrap_or_default(),
            is_loading: state.is_loading(),
            error: state.error().map(str::to_string),
        }
    }
}

/// Orchestrates cache lookups and fetches for the sidebar.
///
/// Only one cycle runs at a time. A cycle requested while another is in
/// flight waits for it and adopts its outcome instead of fetching again.
/// A refresh only adopts a cycle that went to the source; a cache hit does
/// not satisfy it.
pub struct StatsHook {
    source: Arc<dyn StatsSource>,
    cache: TtlCache,
    state: watch::Sender<StatsState>,
    cycle: Mutex<()>,
    completed_cycles: AtomicU64,
    fetched_cycles: AtomicU64,
}

impl StatsHook {
    pub fn new(source: Arc<dyn StatsSource>, cache: TtlCache) -> Self {
        let (state, _) = watch::channel(StatsState::Loading { last: None });
        Self {
            source,
            cache,
            state,
            cycle: Mutex::new(()),
            completed_cycles: AtomicU64::new(0),
            fetched_cycles: AtomicU64::new(0),
        }
    }

    /// Current state.
    pub fn state(&self) -> StatsState {
        self.state.borrow().clone()
    }

    /// Current state as `(stats, languages, is_loading, error)`.
    pub fn view(&self) -> StatsView {
        StatsView::from(&*self.state.borrow())
    }

    /// Initial load: from cache when both entries are fresh, else from the source.
    pub async fn activate(&self) -> StatsView {
        let started = self.completed_cycles.load(Ordering::SeqCst);
        let _guard = self.cycle.lock().await;
        if self.completed_cycles.load(Ordering::SeqCst) != started {
            debug!("joined in-flight cycle");
            return self.view();
        }

        let last = self.state.borrow().snapshot().cloned();
        self.state.send_replace(StatsState::Loading { last });

        let next = match self.load().await {
            Ok(snapshot) => StatsState::Ready(snapshot),
            Err(e) => {
                error!(error = %e, "failed to load GitHub data");
                StatsState::Error {
                    message: LOAD_ERROR.to_string(),
                    last: None,
                }
            }
        };

        self.finish_cycle(next)
    }

    /// Forced refresh: drop both cache entries, then fetch and store anew.
    ///
    /// On failure the previously displayed data is kept alongside the error.
    pub async fn refresh(&self) -> StatsView {
        let started = self.fetched_cycles.load(Ordering::SeqCst);
        let _guard = self.cycle.lock().await;
        if self.fetched_cycles.load(Ordering::SeqCst) != started {
            debug!("joined in-flight fetch");
            return self.view();
        }

        let last = self.state.borrow().snapshot().cloned();

        let next = match self.evict_and_fetch(last.clone()).await {
            Ok(snapshot) => StatsState::Ready(snapshot),
            Err(e) => {
                error!(error = %e, "failed to refresh GitHub data");
                StatsState::Error {
                    message: REFRESH_ERROR.to_string(),
                    last,
                }
            }
        };

        self.finish_cycle(next)
    }

    fn finish_cycle(&self, next: StatsState) -> StatsView {
        self.state.send_replace(next);
        self.completed_cycles.fetch_add(1, Ordering::SeqCst);
        self.view()
    }

    async fn load(&self) -> Result<Snapshot> {
        let stats = self.cache.get::<ProfileStats>(STATS_CACHE_KEY)?;
        let languages = self.cache.get::<Vec<LanguageShare>>(LANGUAGES_CACHE_KEY)?;

        if let (Some(stats), Some(languages)) = (stats, languages) {
            debug!("serving GitHub data from cache");
            return Ok(Snapshot { stats, languages });
        }

        self.fetch_and_store().await
    }

    async fn evict_and_fetch(&self, last: Option<Snapshot>) -> Result<Snapshot> {
        self.cache.evict(STATS_CACHE_KEY)?;
        self.cache.evict(LANGUAGES_CACHE_KEY)?;
        self.state.send_replace(StatsState::Loading { last });

        self.fetch_and_store().await
    }

    async fn fetch_and_store(&self) -> Result<Snapshot> {
        let (stats, languages) =
            tokio::join!(self.source.fetch_stats(), self.source.fetch_languages());
        self.fetched_cycles.fetch_add(1, Ordering::SeqCst);

        self.cache.set(STATS_CACHE_KEY, &stats)?;
        self.cache.set(LANGUAGES_CACHE_KEY, &languages)?;
        info!(languages = languages.len(), "cached fresh GitHub data");

        Ok(Snapshot { stats, languages })
    }
}
