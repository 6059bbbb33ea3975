//! HTTP access to storefront pages.

mod origin;

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

pub use origin::page_url;

/// A fetched page: final status code and raw body text.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET and reports the final status and body.
///
/// Implementations follow redirects. Only transport failures (DNS, refused
/// connection, timeout, unreadable body) are `Err`; any HTTP status,
/// including 4xx/5xx, is returned as a [`FetchedPage`].
pub trait PageFetcher: Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, ScraperError>> + Send;
}

/// Fetches `url` and returns its body, mapping non-2xx statuses to errors.
///
/// # Errors
///
/// - [`ScraperError::NotFound`] for HTTP 404.
/// - [`ScraperError::UnexpectedStatus`] for any other non-2xx status.
/// - Any transport error reported by the fetcher.
pub async fn fetch_body<F: PageFetcher>(fetcher: &F, url: &str) -> Result<String, ScraperError> {
    let page = fetcher.fetch(url).await?;
    if page.is_success() {
        return Ok(page.body);
    }
    if page.status == 404 {
        return Err(ScraperError::NotFound {
            url: url.to_owned(),
        });
    }
    Err(ScraperError::UnexpectedStatus {
        status: page.status,
        url: url.to_owned(),
    })
}

/// [`PageFetcher`] backed by a shared `reqwest::Client`.
///
/// Redirects are followed with reqwest's default policy (up to 10 hops).
/// No retries: every request is attempted exactly once.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// Creates a fetcher with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/json;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(url, status, bytes = body.len(), "fetched page");
        Ok(FetchedPage { status, body })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
