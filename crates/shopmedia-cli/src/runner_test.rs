use std::collections::HashMap;
use std::time::Duration;

use shopmedia_scraper::{FetchedPage, ScraperError};

use super::*;

/// Answers from a fixed URL table; unknown URLs are 404. Hosts starting
/// with `slow` answer after a delay so out-of-order completion can be
/// exercised.
#[derive(Default)]
struct TableFetcher {
    pages: HashMap<String, String>,
}

impl TableFetcher {
    fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_owned(), body.to_owned());
        self
    }
}

impl PageFetcher for TableFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, ScraperError> {
        if url.starts_with("http://slow") {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        Ok(match self.pages.get(url) {
            Some(body) => FetchedPage {
                status: 200,
                body: body.clone(),
            },
            None => FetchedPage {
                status: 404,
                body: String::new(),
            },
        })
    }
}

async fn run_to_string(
    fetcher: TableFetcher,
    input: &str,
    max_concurrent: usize,
) -> (RunSummary, String) {
    let pipeline = ShopPipeline::new(fetcher, ScrapeConfig::default());
    let hosts = HostReader::new(input.as_bytes(), "url").unwrap();
    let mut out = Vec::new();
    let summary = {
        let mut writer = RowWriter::new(&mut out, pipeline.config().product_sample_size).unwrap();
        run_scrape(&pipeline, hosts, &mut writer, max_concurrent)
            .await
            .unwrap()
    };
    (summary, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn example_shop_row_has_two_products_and_no_contacts() {
    let fetcher = TableFetcher::default()
        .page(
            "http://example.com/collections/all",
            r#"<a href="/collections/all/products/one">1</a><a href="/collections/all/products/two">2</a>"#,
        )
        .page(
            "http://example.com/collections/all/products/one.json",
            r#"{"product":{"title":"One","image":{"src":"https://cdn.example.com/1.png"}}}"#,
        )
        .page(
            "http://example.com/collections/all/products/two.json",
            r#"{"product":{"title":"Two","image":{"src":"https://cdn.example.com/2.png"}}}"#,
        );

    let (summary, out) = run_to_string(fetcher, "url\nexample.com\n", 1).await;

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("shop_url,twitter,facebook,email,product_0_title"));
    assert_eq!(
        lines[1],
        "example.com,,,,One,https://cdn.example.com/1.png,Two,https://cdn.example.com/2.png,,,,,,"
    );
    assert_eq!(
        summary,
        RunSummary {
            shops: 1,
            shops_with_products: 1,
            shops_with_contact: 0,
        }
    );
}

#[tokio::test]
async fn rows_keep_input_order_under_concurrency() {
    let fetcher = TableFetcher::default()
        .page("http://slow-shop.com/", "team@slowshop.com")
        .page("http://fast-shop.com/", "team@fastshop.com");

    let (summary, out) = run_to_string(fetcher, "url\nslow-shop.com\nfast-shop.com\n", 4).await;

    let hosts: Vec<&str> = out
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(hosts, ["slow-shop.com", "fast-shop.com"]);
    assert_eq!(summary.shops, 2);
    assert_eq!(summary.shops_with_contact, 2);
    assert!(out.contains("slow-shop.com,,,team@slowshop.com,"));
}

#[tokio::test]
async fn every_input_host_gets_a_row_even_when_everything_fails() {
    let (summary, out) =
        run_to_string(TableFetcher::default(), "url\na.com\nb.com\nc.com\n", 2).await;

    assert_eq!(summary.shops, 3);
    assert_eq!(summary.shops_with_products, 0);
    let rows: Vec<&str> = out.lines().skip(1).collect();
    assert_eq!(rows, ["a.com,,,,,,,,,,,,,", "b.com,,,,,,,,,,,,,", "c.com,,,,,,,,,,,,,"]);
}

#[tokio::test]
async fn missing_url_column_aborts_before_scraping() {
    let dir = std::env::temp_dir().join(format!("shopmedia-runner-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("stores.csv");
    let output = dir.join("output.csv");
    std::fs::write(&input, "domain\nexample.com\n").unwrap();
    let _ = std::fs::remove_file(&output);

    let config = shopmedia_core::AppConfig {
        log_level: "info".to_string(),
        scraper_request_timeout_secs: 5,
        scraper_user_agent: "shopmedia-test/0.1".to_string(),
        scraper_max_concurrent_shops: 1,
        product_sample_size: 5,
        contact_strategy: shopmedia_core::ContactStrategy::FirstMatch,
        input_url_column: "url".to_string(),
    };
    let err = run_from_files(&config, &input, &output).await.unwrap_err();

    assert!(err.to_string().contains("column \"url\" is not found"), "got: {err}");
    assert!(!output.exists(), "output must not be created");
    std::fs::remove_dir_all(&dir).ok();
}
