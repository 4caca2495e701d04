// Project catalog loading, filtering, and paging.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;

use super::pagination::{PageItem, clamp_page, item_range, page_window, total_pages};
use super::project::{Category, Difficulty, Project};

/// Cards per page when the client does not say.
pub const DEFAULT_PER_PAGE: usize = 6;

/// Criteria a project must all match to be listed.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub category: Option<Category>,
    pub technology: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.category.is_none_or(|category| project.category == category)
            && self
                .difficulty
                .is_none_or(|difficulty| project.difficulty == difficulty)
            && self
                .technology
                .as_deref()
                .is_none_or(|technology| project.uses_technology(technology))
    }
}

/// One page of filtered projects plus the data the page controls need.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    pub page: u32,
    pub total_pages: u32,
    pub total_items: usize,
    pub start: usize,
    pub end: usize,
    pub pages: Vec<PageItem>,
}

/// All projects shown in the portfolio.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Load projects from a JSON array file. A missing file is an empty catalog.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "project file not found, catalog is empty");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let projects: Vec<Project> = serde_json::from_str(&contents)?;
        info!(path = %path.display(), count = projects.len(), "loaded project catalog");
        Ok(Self::new(projects))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn by_category(&self, category: Category) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn by_technology(&self, technology: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.uses_technology(technology))
            .collect()
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .collect()
    }

    /// Filter, then cut out one page. Out-of-range pages are clamped.
    pub fn page(&self, filter: &ProjectFilter, page: u32, per_page: usize) -> ProjectPage {
        let per_page = per_page.max(1);
        let matching: Vec<&Project> = self.projects.iter().filter(|p| filter.matches(p)).collect();

        let total_items = matching.len();
        let total_pages = total_pages(total_items, per_page);
        let page = clamp_page(page, total_pages);
        let (start, end) = item_range(page, per_page, total_items);

        let projects = matching
            .into_iter()
            .skip((page as usize - 1) * per_page)
            .take(per_page)
            .cloned()
            .collect();

        ProjectPage {
            projects,
            page,
            total_pages,
            total_items,
            start,
            end,
            pages: page_window(page, total_pages),
        }
    }
}
