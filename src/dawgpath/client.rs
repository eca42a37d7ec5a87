//! Authenticated DawgPath API client.

use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

use super::cookies::CookieStore;
use super::responses::{self, SearchResult};
use super::DAWGPATH_ROOT;

/// Default per-request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Client for the DawgPath course-exploration API.
///
/// Carries the captured session cookies and sends them as a `Cookie`
/// header on every request.
pub struct DawgPathClient {
    client: reqwest::Client,
    root: String,
    cookies: CookieStore,
}

impl DawgPathClient {
    /// Client against the live DawgPath site.
    pub fn new(cookies: CookieStore) -> Self {
        Self::with_root(DAWGPATH_ROOT, cookies)
    }

    /// Client against a non-default root. Tests point this at a stub
    /// server.
    pub fn with_root(root: &str, cookies: CookieStore) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            root: root.trim_end_matches('/').to_string(),
            cookies,
        }
    }

    /// Search courses, majors, and free text.
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        let url = Url::parse_with_params(
            &format!("{}/api/v1/search/", self.root),
            &[("search_string", query)],
        )
        .context("invalid search URL")?;

        let response = self
            .client
            .get(url.clone())
            .header("Cookie", self.cookies.header_value())
            .send()
            .await
            .with_context(|| format!("search request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(
                "search returned HTTP {status}; the saved session may have expired, run `quartermap login` to refresh it"
            );
        }

        let body: serde_json::Value = response
            .json()
            .await
            .context("search response was not JSON")?;
        responses::parse_search(&body)
    }
}
