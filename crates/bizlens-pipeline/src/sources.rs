//! Seams between the batch runner and the network.

use std::future::Future;

use bizlens_insights::{InsightClient, InsightError, InsightFields};
use bizlens_scraper::{FetchError, FetchedPage, SiteFetcher};

/// Resolves a site identifier to a fetched page.
pub trait PageSource {
    fn fetch_page(&self, identifier: &str)
        -> impl Future<Output = Result<FetchedPage, FetchError>>;
}

/// Turns page text into insight fields.
pub trait InsightSource {
    fn request_insights(
        &self,
        url: &str,
        text: &str,
    ) -> impl Future<Output = Result<InsightFields, InsightError>>;
}

impl PageSource for SiteFetcher {
    async fn fetch_page(&self, identifier: &str) -> Result<FetchedPage, FetchError> {
        self.fetch_site(identifier).await
    }
}

impl InsightSource for InsightClient {
    async fn request_insights(&self, url: &str, text: &str) -> Result<InsightFields, InsightError> {
        InsightClient::request_insights(self, url, text).await
    }
}
