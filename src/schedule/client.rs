//! Schedule page fetcher wrapping reqwest.
//!
//! One GET per request, no retries. The frequency scanner owns the
//! skip-and-continue policy, so this layer only maps failures onto the
//! fault taxonomy.

use std::time::Duration;

use crate::error::{ScheduleError, ScheduleResult};

use super::term::{ScheduleRequest, SCHEDULE_ROOT};

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// HTTP client for published schedule pages.
#[derive(Clone)]
pub struct ScheduleClient {
    client: reqwest::Client,
    root: String,
}

impl ScheduleClient {
    /// Create a client against the live schedule site.
    pub fn new(timeout_ms: u64) -> Self {
        Self::with_root(SCHEDULE_ROOT, timeout_ms)
    }

    /// Create a client against a non-default root, trailing slash
    /// included. Tests point this at a stub server.
    pub fn with_root(root: &str, timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_default();

        Self {
            client,
            root: root.to_string(),
        }
    }

    /// Fetch the raw schedule document for a validated request.
    ///
    /// HTTP 4xx/5xx means the page (or the whole term) was never
    /// published and maps to `PageNotFound`; transport failures map to
    /// `Unreachable`. The body is returned untouched, no HTML parsing.
    pub async fn fetch(&self, request: &ScheduleRequest) -> ScheduleResult<String> {
        let url = request.url(&self.root);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ScheduleError::Unreachable {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ScheduleError::PageNotFound { url });
        }

        response
            .text()
            .await
            .map_err(|source| ScheduleError::Unreachable { url, source })
    }
}
