// Portfolio project catalog.
// Project model, filtering, and pagination for the project grid.

pub mod catalog;
pub mod pagination;
pub mod project;

pub use catalog::{Catalog, DEFAULT_PER_PAGE, ProjectFilter, ProjectPage};
pub use pagination::PageItem;
pub use project::{Category, Difficulty, Project, Status};
