//! Per-shop composition of contact and product scraping.

use shopmedia_core::{AppConfig, ContactStrategy, ShopResult, DEFAULT_PRODUCT_SAMPLE_SIZE};

use crate::client::PageFetcher;
use crate::contact::ContactInfoScraper;
use crate::products::ProductInfoScraper;
use crate::resolver::SocialResolver;

/// Pages probed for contact signals, in probe order.
pub const CONTACT_ENDPOINTS: [&str; 5] = [
    "/",
    "/pages/about",
    "/pages/about-us",
    "/contact",
    "/contact-us",
];

/// Catalog listing page that product links are scraped from.
pub const PRODUCT_LIST_ENDPOINT: &str = "/collections/all";

/// Immutable per-run scraping settings.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub contact_endpoints: Vec<String>,
    pub product_list_endpoint: String,
    pub product_sample_size: usize,
    pub contact_strategy: ContactStrategy,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            contact_endpoints: CONTACT_ENDPOINTS.iter().map(|e| (*e).to_owned()).collect(),
            product_list_endpoint: PRODUCT_LIST_ENDPOINT.to_owned(),
            product_sample_size: DEFAULT_PRODUCT_SAMPLE_SIZE,
            contact_strategy: ContactStrategy::FirstMatch,
        }
    }
}

impl ScrapeConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            product_sample_size: config.product_sample_size,
            contact_strategy: config.contact_strategy,
            ..Self::default()
        }
    }
}

/// Runs both scrapers for one host and assembles its [`ShopResult`].
///
/// Shared by every shop of a run; holds no per-shop state, so one pipeline
/// can drive several shops concurrently.
pub struct ShopPipeline<F> {
    fetcher: F,
    resolver: SocialResolver,
    config: ScrapeConfig,
}

impl<F: PageFetcher> ShopPipeline<F> {
    pub fn new(fetcher: F, config: ScrapeConfig) -> Self {
        Self::with_resolver(fetcher, config, SocialResolver::new())
    }

    pub fn with_resolver(fetcher: F, config: ScrapeConfig, resolver: SocialResolver) -> Self {
        Self {
            fetcher,
            resolver,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Scrapes `host`. Never fails: anything that goes wrong degrades to
    /// absent fields in the result.
    pub async fn run(&self, host: &str) -> ShopResult {
        let contact = ContactInfoScraper::new(
            &self.fetcher,
            &self.resolver,
            &self.config.contact_endpoints,
            self.config.contact_strategy,
        )
        .scrape(host)
        .await;

        let products = ProductInfoScraper::new(
            &self.fetcher,
            &self.config.product_list_endpoint,
            self.config.product_sample_size,
        )
        .scrape(host)
        .await;

        let found_products = products.iter().filter(|p| !p.is_placeholder()).count();
        tracing::info!(
            host,
            found_products,
            contact_found = !contact.is_empty(),
            "shop scraped"
        );

        ShopResult::new(
            host.to_owned(),
            contact,
            products,
            self.config.product_sample_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_endpoints() {
        let config = ScrapeConfig::default();
        assert_eq!(
            config.contact_endpoints,
            ["/", "/pages/about", "/pages/about-us", "/contact", "/contact-us"]
        );
        assert_eq!(config.product_list_endpoint, "/collections/all");
        assert_eq!(config.product_sample_size, 5);
        assert_eq!(config.contact_strategy, ContactStrategy::FirstMatch);
    }

    #[test]
    fn from_app_config_takes_sample_size_and_strategy() {
        let app = AppConfig {
            log_level: "info".to_string(),
            scraper_request_timeout_secs: 30,
            scraper_user_agent: "test".to_string(),
            scraper_max_concurrent_shops: 1,
            product_sample_size: 3,
            contact_strategy: ContactStrategy::Accumulate,
            input_url_column: "url".to_string(),
        };
        let config = ScrapeConfig::from_app_config(&app);
        assert_eq!(config.product_sample_size, 3);
        assert_eq!(config.contact_strategy, ContactStrategy::Accumulate);
        assert_eq!(config.contact_endpoints.len(), CONTACT_ENDPOINTS.len());
    }
}
