// Command line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::github::{DEFAULT_TIMEOUT, GITHUB_API_BASE};

/// Serve the portfolio page and its GitHub sidebar data.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio", version, about)]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "FOLIO_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "FOLIO_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory of built page assets.
    #[arg(long = "dist", env = "FOLIO_DIST_DIR", default_value = "dist")]
    pub dist_dir: PathBuf,

    /// Project catalog JSON. Defaults to `projects.json` in the dist directory.
    #[arg(long, env = "FOLIO_PROJECTS")]
    pub projects: Option<PathBuf>,

    /// GitHub user whose statistics are shown.
    #[arg(short, long, env = "GITHUB_USERNAME", default_value = "Lil-Code30")]
    pub username: String,

    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_BASE", default_value = GITHUB_API_BASE)]
    pub api_base: String,

    /// Optional token, raises the API rate limit.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Per-request timeout for GitHub calls, in seconds.
    #[arg(long, env = "FOLIO_REQUEST_TIMEOUT", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub request_timeout_secs: u64,

    /// Cache directory. Defaults to the per-user cache directory.
    #[arg(long, env = "FOLIO_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Keep cached GitHub data in memory only.
    #[arg(long)]
    pub no_persist: bool,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn projects_path(&self) -> PathBuf {
        self.projects
            .clone()
            .unwrap_or_else(|| self.dist_dir.join("projects.json"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
