// Aggregation of repository data into sidebar statistics.
// Pure functions; all network access lives in the fetcher.

use std::collections::BTreeMap;

use rand::Rng;

use crate::github::{LanguageBytes, Repository, UserProfile};

use super::fallback::language_color;
use super::types::{LanguageShare, ProfileStats};

/// Repositories sampled for language breakdowns, to bound API requests.
pub const LANGUAGE_SAMPLE_SIZE: usize = 20;

/// Languages kept in the ranked list.
pub const TOP_LANGUAGES: usize = 6;

/// Activity counts the REST endpoints cannot provide.
///
/// Commits, pull requests and issues would need the search or GraphQL APIs.
/// Until then these are bounded placeholder values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub commits: u64,
    pub prs: u64,
    pub issues: u64,
}

impl Activity {
    /// Random placeholder: commits in [1000, 1500), PRs in [5, 25), issues in [0, 5).
    pub fn placeholder<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            commits: rng.gen_range(1000..1500),
            prs: rng.gen_range(5..25),
            issues: rng.gen_range(0..5),
        }
    }
}

/// Combine the profile and repository list into profile statistics.
pub fn summarize(profile: &UserProfile, repos: &[Repository], activity: Activity) -> ProfileStats {
    let total_stars = repos.iter().map(|repo| repo.stargazers_count).sum();
    // Forks stand in for repositories contributed to
    let contributed_repos = repos.iter().filter(|repo| repo.fork).count() as u64;

    ProfileStats {
        total_stars,
        total_commits: activity.commits,
        total_prs: activity.prs,
        total_issues: activity.issues,
        contributed_repos,
        public_repos: profile.public_repos,
        followers: profile.followers,
        following: profile.following,
    }
}

/// The repositories whose language breakdowns are fetched: the first
/// [`LANGUAGE_SAMPLE_SIZE`] that declare a primary language.
pub fn language_sample(repos: &[Repository]) -> Vec<&Repository> {
    repos
        .iter()
        .filter(|repo| repo.language.is_some())
        .take(LANGUAGE_SAMPLE_SIZE)
        .collect()
}

/// Sum byte counts per language across repositories.
pub fn language_totals<I>(breakdowns: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = LanguageBytes>,
{
    let mut totals = BTreeMap::new();
    for breakdown in breakdowns {
        for (language, bytes) in breakdown {
            *totals.entry(language).or_insert(0u64) += bytes;
        }
    }
    totals
}

/// Every language's share of the total, most used first.
///
/// Empty when there are no bytes at all.
pub fn language_shares(totals: &BTreeMap<String, u64>) -> Vec<LanguageShare> {
    let total_bytes: u64 = totals.values().sum();
    if total_bytes == 0 {
        return Vec::new();
    }

    let mut shares: Vec<LanguageShare> = totals
        .iter()
        .map(|(name, bytes)| {
            LanguageShare::new(
                name.clone(),
                *bytes as f64 / total_bytes as f64 * 100.0,
                language_color(name),
            )
        })
        .collect();

    shares.sort_by(|a, b| {
        b.percentage
            .total_cmp(&a.percentage)
            .then_with(|| a.name.cmp(&b.name))
    });
    shares
}

/// The top [`TOP_LANGUAGES`] languages.
pub fn rank_languages(totals: &BTreeMap<String, u64>) -> Vec<LanguageShare> {
    let mut shares = language_shares(totals);
    shares.truncate(TOP_LANGUAGES);
    shares
}
