pub mod client;
pub mod contact;
pub mod error;
pub mod patterns;
pub mod pipeline;
pub mod products;
pub mod resolver;
pub mod types;

pub use client::{page_url, FetchedPage, HttpPageFetcher, PageFetcher};
pub use contact::ContactInfoScraper;
pub use error::ScraperError;
pub use patterns::Pattern;
pub use pipeline::{ScrapeConfig, ShopPipeline};
pub use products::ProductInfoScraper;
pub use resolver::SocialResolver;
