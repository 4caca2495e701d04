// Stats fetcher backed by the GitHub REST API.
// Every failure degrades to the fallback values; callers never see an error.

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::error::{FolioError, Result};
use crate::github::GitHubClient;

use super::aggregate::{Activity, language_sample, language_totals, rank_languages, summarize};
use super::fallback::{FALLBACK_STATS, fallback_languages};
use super::types::{LanguageShare, ProfileStats};

/// Source of sidebar statistics.
///
/// Implementations never fail: on any problem they hand back fallback data.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_stats(&self) -> ProfileStats;

    async fn fetch_languages(&self) -> Vec<LanguageShare>;
}

/// Fetches statistics for one GitHub user.
pub struct GitHubStatsFetcher {
    client: GitHubClient,
    username: String,
}

impl GitHubStatsFetcher {
    pub fn new(client: GitHubClient, username: impl Into<String>) -> Self {
        Self {
            client,
            username: username.into(),
        }
    }

    async fn try_fetch_stats(&self) -> Result<ProfileStats> {
        let (profile, repos) = tokio::join!(
            self.client.get_user(&self.username),
            self.client.get_all_user_repos(&self.username),
        );
        let profile = profile?;
        let repos = repos?;

        let activity = Activity::placeholder(&mut rand::thread_rng());
        Ok(summarize(&profile, &repos, activity))
    }

    async fn try_fetch_languages(&self) -> Result<Vec<LanguageShare>> {
        let repos = self.client.get_all_user_repos(&self.username).await?;
        if repos.is_empty() {
            return Err(FolioError::Other("user has no repositories".to_string()));
        }

        let sample = language_sample(&repos);
        debug!(sampled = sample.len(), "fetching language breakdowns");

        let results = join_all(sample.iter().map(|repo| async move {
            match self.client.get_languages(&repo.languages_url).await {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    warn!(repo = %repo.name, error = %e, "skipping language breakdown");
                    None
                }
            }
        }))
        .await;

        let totals = language_totals(results.into_iter().flatten());
        Ok(rank_languages(&totals))
    }
}

#[async_trait]
impl StatsSource for GitHubStatsFetcher {
    async fn fetch_stats(&self) -> ProfileStats {
        match self.try_fetch_stats().await {
            Ok(stats) => {
                info!(username = %self.username, stars = stats.total_stars, "fetched profile stats");
                stats
            }
            Err(e) => {
                warn!(username = %self.username, error = %e, "using fallback profile stats");
                FALLBACK_STATS
            }
        }
    }

    async fn fetch_languages(&self) -> Vec<LanguageShare> {
        match self.try_fetch_languages().await {
            Ok(languages) if !languages.is_empty() => {
                info!(username = %self.username, count = languages.len(), "fetched language shares");
                languages
            }
            Ok(_) => {
                warn!(username = %self.username, "no language data, using fallback languages");
                fallback_languages()
            }
            Err(e) => {
                warn!(username = %self.username, error = %e, "using fallback languages");
                fallback_languages()
            }
        }
    }
}
