// Fixed values used when GitHub data cannot be obtained, and language colors.

use super::types::{LanguageShare, ProfileStats};

/// Color for languages missing from [`LANGUAGE_COLORS`].
pub const DEFAULT_LANGUAGE_COLOR: &str = "#8cc8ff";

/// GitHub's linguist colors for commonly seen languages.
pub const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#3178c6"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("SCSS", "#c6538c"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("C++", "#f34b7d"),
    ("C#", "#239120"),
    ("PHP", "#4F5D95"),
    ("Go", "#00ADD8"),
    ("Rust", "#dea584"),
    ("Swift", "#fa7343"),
    ("Kotlin", "#A97BFF"),
    ("Dart", "#00B4AB"),
    ("Ruby", "#701516"),
    ("Shell", "#89e051"),
    ("Dockerfile", "#384d54"),
    ("Vue", "#41b883"),
    ("React", "#61dafb"),
];

pub const FALLBACK_STATS: ProfileStats = ProfileStats {
    total_stars: 28,
    total_commits: 1400,
    total_prs: 11,
    total_issues: 0,
    contributed_repos: 8,
    public_repos: 30,
    followers: 25,
    following: 15,
};

const FALLBACK_LANGUAGES: [(&str, f64); 6] = [
    ("JavaScript", 32.95),
    ("HTML", 30.47),
    ("CSS", 16.75),
    ("TypeScript", 9.65),
    ("SCSS", 7.39),
    ("Python", 1.54),
];

/// Display color for a language name.
pub fn language_color(name: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(language, _)| *language == name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

pub fn fallback_languages() -> Vec<LanguageShare> {
    FALLBACK_LANGUAGES
        .iter()
        .map(|(name, percentage)| LanguageShare::new(*name, *percentage, language_color(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_color_lookup() {
        assert_eq!(language_color("Rust"), "#dea584");
        assert_eq!(language_color("C#"), "#239120");
        assert_eq!(language_color("Zig"), DEFAULT_LANGUAGE_COLOR);
        // Names are matched exactly
        assert_eq!(language_color("rust"), DEFAULT_LANGUAGE_COLOR);
    }

    #[test]
    fn test_fallback_languages_colors() {
        let colors: Vec<String> = fallback_languages().into_iter().map(|l| l.color).collect();
        assert_eq!(
            colors,
            ["#f1e05a", "#e34c26", "#563d7c", "#3178c6", "#c6538c", "#3572A5"]
        );
    }
}
