// GitHub API module.
// Provides the client and response types for the GitHub REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{DEFAULT_TIMEOUT, GITHUB_API_BASE, GitHubClient};
pub use endpoints::{MAX_REPO_PAGES, REPOS_PER_PAGE};
pub use types::*;
