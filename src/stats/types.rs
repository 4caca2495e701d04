// Summary types shown in the profile sidebar.

use serde::{Deserialize, Serialize};

/// Aggregated profile statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_stars: u64,
    pub total_commits: u64,
    #[serde(rename = "totalPRs")]
    pub total_prs: u64,
    pub total_issues: u64,
    pub contributed_repos: u64,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

/// One language's share of the sampled source bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    /// Percentage of all sampled bytes, in `[0, 100]`.
    pub percentage: f64,
    /// Display color as a hex code.
    pub color: String,
}

impl LanguageShare {
    pub fn new(name: impl Into<String>, percentage: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            percentage,
            color: color.into(),
        }
    }
}
