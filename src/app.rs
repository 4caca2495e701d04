// Application wiring and server lifecycle.
// Builds the stats hook, catalog, and router from configuration, then serves.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::cache::{CacheStore, FileStore, MemoryStore, TtlCache};
use crate::config::Config;
use crate::error::{FolioError, Result};
use crate::github::GitHubClient;
use crate::portfolio::Catalog;
use crate::server::{self, AppState};
use crate::stats::{GitHubStatsFetcher, StatsHook};

/// Fully constructed application, ready to serve.
pub struct App {
    pub state: AppState,
    config: Config,
}

impl App {
    pub fn from_config(config: Config) -> Result<Self> {
        let client = GitHubClient::new(
            &config.api_base,
            config.token.as_deref(),
            config.request_timeout(),
        )?;
        let fetcher = GitHubStatsFetcher::new(client, config.username.clone());

        let hook = StatsHook::new(Arc::new(fetcher), TtlCache::new(cache_store(&config)?));
        let catalog = Catalog::load(&config.projects_path())?;

        let state = AppState {
            hook: Arc::new(hook),
            catalog: Arc::new(catalog),
            dist_dir: Arc::new(config.dist_dir.clone()),
        };

        Ok(Self { state, config })
    }

    /// Start the initial stats load in the background and serve until shutdown.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.listen_addr();
        let listener = TcpListener::bind(addr).await?;

        if !self.config.dist_dir.is_dir() {
            warn!(dist = %self.config.dist_dir.display(), "dist directory does not exist");
        }
        info!(%addr, dist = %self.config.dist_dir.display(), username = %self.config.username, "server listening");

        let hook = self.state.hook.clone();
        tokio::spawn(async move {
            hook.activate().await;
        });

        axum::serve(listener, server::router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(FolioError::Io)
    }
}

fn cache_store(config: &Config) -> Result<Arc<dyn CacheStore>> {
    if config.no_persist {
        info!("GitHub data cached in memory only");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = match &config.cache_dir {
        Some(dir) => FileStore::new(dir.clone()),
        None => FileStore::in_user_cache()?,
    };
    info!(dir = %store.dir().display(), "GitHub data cached on disk");
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_from_config_without_projects_file() {
        let dist = TempDir::new().unwrap();
        let config = Config::try_parse_from([
            "folio",
            "--dist",
            dist.path().to_str().unwrap(),
            "--no-persist",
        ])
        .unwrap();

        let app = App::from_config(config).unwrap();

        assert!(app.state.catalog.is_empty());
        assert!(app.state.hook.view().is_loading);
    }

    #[test]
    fn test_from_config_rejects_malformed_projects() {
        let dist = TempDir::new().unwrap();
        std::fs::write(dist.path().join("projects.json"), "{").unwrap();
        let cache = TempDir::new().unwrap();
        let config = Config::try_parse_from([
            "folio",
            "--dist",
            dist.path().to_str().unwrap(),
            "--cache-dir",
            cache.path().to_str().unwrap(),
        ])
        .unwrap();

        assert!(App::from_config(config).is_err());
    }
}
