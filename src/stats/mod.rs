// GitHub profile statistics for the portfolio sidebar.
// Fetching, aggregation, fallbacks, and the cached load/refresh state machine.

pub mod aggregate;
pub mod fallback;
pub mod fetcher;
pub mod hook;
pub mod types;

pub use fallback::{FALLBACK_STATS, fallback_languages};
pub use fetcher::{GitHubStatsFetcher, StatsSource};
pub use hook::{LANGUAGES_CACHE_KEY, STATS_CACHE_KEY, StatsHook, StatsState, StatsView};
pub use types::{LanguageShare, ProfileStats};
