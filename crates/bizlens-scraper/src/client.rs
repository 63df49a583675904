//! HTTP client that resolves a site identifier to the first reachable page.

use std::time::Duration;

use reqwest::Client;

use crate::candidates::candidate_urls;
use crate::error::FetchError;

/// Browser-like identification header sent with every page request.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// A page body and the candidate URL that served it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub body: String,
    pub url: String,
}

/// Fetches site home pages, falling back across URL variants.
///
/// Each candidate gets exactly one request. Only HTTP 200 with a non-empty
/// body counts as success; the first success ends the search.
pub struct SiteFetcher {
    client: Client,
}

impl SiteFetcher {
    /// Creates a `SiteFetcher` whose requests time out after `timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Resolves `identifier` to page content.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unreachable`] when every candidate URL fails.
    /// Individual candidate failures are logged, never returned.
    pub async fn fetch_site(&self, identifier: &str) -> Result<FetchedPage, FetchError> {
        let candidates = candidate_urls(identifier);
        self.fetch_first(identifier, &candidates).await
    }

    /// Tries `candidates` in order and returns the first success.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unreachable`] if no candidate succeeds.
    pub async fn fetch_first(
        &self,
        identifier: &str,
        candidates: &[String],
    ) -> Result<FetchedPage, FetchError> {
        for url in candidates {
            match self.try_fetch(url).await {
                Ok(body) => {
                    tracing::debug!(identifier, url = %url, bytes = body.len(), "fetched site");
                    return Ok(FetchedPage {
                        body,
                        url: url.clone(),
                    });
                }
                Err(e) => {
                    tracing::warn!(identifier, url = %url, error = %e, "failed to fetch candidate");
                }
            }
        }

        Err(FetchError::Unreachable {
            identifier: identifier.to_string(),
            attempts: candidates.len(),
        })
    }

    async fn try_fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }
        Ok(body)
    }
}
