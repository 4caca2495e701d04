// Project card data model.

use serde::{Deserialize, Serialize};

/// Kind of project shown on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Frontend,
    #[serde(rename = "Full-Stack")]
    FullStack,
    Backend,
    Mobile,
    #[serde(rename = "CLI")]
    Cli,
    Game,
    #[serde(rename = "API")]
    Api,
    Learning,
    Package,
    Experimental,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Paused,
    Archived,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub category: Category,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    pub code_url: String,
    pub thumbnail: String,
    pub status: Status,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Project {
    /// Whether any technology contains `needle`, ignoring case.
    pub fn uses_technology(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.technologies
            .iter()
            .any(|technology| technology.to_lowercase().contains(&needle))
    }
}
