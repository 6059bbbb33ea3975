//! Catalog sampling: listing page → product links → per-product JSON.

use std::collections::HashSet;

use shopmedia_core::ProductRecord;

use crate::client::{fetch_body, page_url, PageFetcher};
use crate::error::ScraperError;
use crate::patterns::Pattern;
use crate::types::ProductDetailResponse;

/// Samples up to `sample_size` products from a shop's catalog listing.
///
/// Every failure is contained: a failed listing fetch yields all
/// placeholders, a failed product fetch or parse yields a placeholder for
/// that slot only. The result always has exactly `sample_size` entries.
pub struct ProductInfoScraper<'a, F> {
    fetcher: &'a F,
    listing_endpoint: &'a str,
    sample_size: usize,
}

impl<'a, F: PageFetcher> ProductInfoScraper<'a, F> {
    pub fn new(fetcher: &'a F, listing_endpoint: &'a str, sample_size: usize) -> Self {
        Self {
            fetcher,
            listing_endpoint,
            sample_size,
        }
    }

    pub async fn scrape(&self, host: &str) -> Vec<ProductRecord> {
        let listing_url = page_url(host, self.listing_endpoint);
        let listing = match fetch_body(self.fetcher, &listing_url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(host, url = %listing_url, error = %e, "catalog listing unavailable");
                return self.placeholders();
            }
        };

        let links = unique_product_links(&listing, self.sample_size);
        if links.is_empty() {
            tracing::warn!(host, url = %listing_url, "shop has no products");
            return self.placeholders();
        }

        let mut records = Vec::with_capacity(self.sample_size);
        for link in &links {
            let record = match self.fetch_product(host, link).await {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(host, link = %link, error = %e, "product details unavailable");
                    ProductRecord::placeholder()
                }
            };
            records.push(record);
        }
        records.resize_with(self.sample_size, ProductRecord::placeholder);
        records
    }

    /// Fetches `<link>.json` and extracts title and primary image.
    async fn fetch_product(&self, host: &str, link: &str) -> Result<ProductRecord, ScraperError> {
        let url = page_url(host, &format!("{link}.json"));
        let body = fetch_body(self.fetcher, &url).await?;
        let parsed = serde_json::from_str::<ProductDetailResponse>(&body).map_err(|e| {
            ScraperError::Deserialize {
                context: format!("product details from {url}"),
                source: e,
            }
        })?;
        Ok(parsed.into())
    }

    fn placeholders(&self) -> Vec<ProductRecord> {
        vec![ProductRecord::placeholder(); self.sample_size]
    }
}

/// Product links in `body`, deduplicated by exact string equality in
/// first-seen order, capped at `limit`.
#[must_use]
pub fn unique_product_links(body: &str, limit: usize) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    Pattern::ProductLink
        .find_all(body)
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .take(limit)
        .collect()
}
