// folio: portfolio page server with cached GitHub profile statistics.

pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod portfolio;
pub mod server;
pub mod stats;

pub use error::{FolioError, Result};
