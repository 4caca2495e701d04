// GitHub API HTTP client.
// Handles optional authentication, rate limit tracking, and status checking.

use std::sync::Mutex;
use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{FolioError, Result};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub API client with rate limit tracking.
///
/// Requests take `&self` so the profile and repository fetches can be
/// issued concurrently from one client.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    rate_limit: Mutex<RateLimit>,
}

impl GitHubClient {
    /// Create a client against `base_url`, authenticating when a token is given.
    pub fn new(base_url: &str, token: Option<&str>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| FolioError::Config(e.to_string()))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("folio"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(FolioError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limit: Mutex::new(RateLimit::default()),
        })
    }

    /// Snapshot of the last seen rate limit headers.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
            .lock()
            .map(|limit| limit.clone())
            .unwrap_or_default()
    }

    /// Make a GET request to an API endpoint.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.get_url(&url).await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(FolioError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response).await
    }

    /// Make a GET request to an absolute URL handed out by the API
    /// (e.g. a repository's `languages_url`).
    pub async fn get_url(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await.map_err(FolioError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response).await
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&self, response: &Response) {
        let header = |name: &str| -> Option<u64> {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        let Ok(mut rate_limit) = self.rate_limit.lock() else {
            return;
        };

        if let Some(limit) = header("x-ratelimit-limit") {
            rate_limit.limit = limit;
        }
        if let Some(remaining) = header("x-ratelimit-remaining") {
            rate_limit.remaining = remaining;
        }
        if let Some(reset) = header("x-ratelimit-reset") {
            rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        match status {
            StatusCode::UNAUTHORIZED => Err(FolioError::Unauthorized),
            StatusCode::NOT_FOUND => Err(FolioError::NotFound(url)),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
                if self.rate_limit().remaining == 0 =>
            {
                let reset_at = chrono::DateTime::from_timestamp(self.rate_limit().reset as i64, 0)
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(FolioError::RateLimited { reset_at })
            }
            status => Err(FolioError::Status {
                status: status.as_u16(),
                url,
            }),
        }
    }
}
