// GitHub API response types.
// Only the fields the portfolio sidebar reads are deserialized.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Public profile of a GitHub user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

/// Public repository owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub fork: bool,
    /// Primary language as detected by GitHub.
    pub language: Option<String>,
    pub languages_url: String,
}

/// Bytes of source per language name, as returned by `languages_url`.
pub type LanguageBytes = BTreeMap<String, u64>;

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
