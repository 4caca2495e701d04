// GitHub API endpoint functions.
// Typed fetches for the profile, repository list, and language breakdowns.

use tracing::debug;

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{LanguageBytes, Repository, UserProfile};

/// Page size used for repository listing; the API maximum.
pub const REPOS_PER_PAGE: u32 = 100;

/// Upper bound on repository pages walked in one listing.
pub const MAX_REPO_PAGES: u32 = 10;

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&self, username: &str) -> Result<UserProfile> {
        let response = self.get(&format!("/users/{}", username)).await?;
        let user: UserProfile = response.json().await?;
        Ok(user)
    }

    /// Get one page of a user's repositories, most recently updated first.
    pub async fn get_user_repos(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>> {
        let params = [
            ("per_page", per_page.to_string()),
            ("sort", "updated".to_string()),
            ("page", page.to_string()),
        ];
        let response = self
            .get_with_params(&format!("/users/{}/repos", username), &params)
            .await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }

    /// Get all of a user's repositories by walking pages until a short page.
    pub async fn get_all_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let mut repos = Vec::new();

        for page in 1..=MAX_REPO_PAGES {
            let batch = self.get_user_repos(username, page, REPOS_PER_PAGE).await?;
            let count = batch.len();
            repos.extend(batch);

            debug!(username, page, count, "fetched repository page");

            if count < REPOS_PER_PAGE as usize {
                break;
            }
        }

        Ok(repos)
    }

    /// Get the per-language byte counts for a repository.
    pub async fn get_languages(&self, languages_url: &str) -> Result<LanguageBytes> {
        let response = self.get_url(languages_url).await?;
        let languages: LanguageBytes = response.json().await?;
        Ok(languages)
    }
}
