//! Drives the shop pipeline over every input host and streams rows out.

use std::fs::File;
use std::io;
use std::path::Path;

use futures::stream::{self, StreamExt};
use shopmedia_scraper::{HttpPageFetcher, PageFetcher, ScrapeConfig, ShopPipeline};

use crate::input::{HostReader, InputError};
use crate::output::RowWriter;

/// Totals reported at the end of a run.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub shops: usize,
    pub shops_with_products: usize,
    pub shops_with_contact: usize,
}

/// Scrapes every host in `input` and writes the result table to `output`.
///
/// The input header is validated before the output file is created or any
/// request is made.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or lacks the configured
/// host column, or if the output cannot be created or written. Per-shop
/// scraping failures never surface here.
pub(crate) async fn run_from_files(
    config: &shopmedia_core::AppConfig,
    input: &Path,
    output: &Path,
) -> anyhow::Result<RunSummary> {
    let input_file = File::open(input)
        .map_err(|e| anyhow::anyhow!("failed to open input {}: {e}", input.display()))?;
    let hosts = match HostReader::new(input_file, &config.input_url_column) {
        Ok(hosts) => hosts,
        Err(e @ InputError::MissingColumn { .. }) => {
            tracing::error!(input = %input.display(), error = %e, "cannot start scraping");
            anyhow::bail!("{e} ({})", input.display());
        }
        Err(e) => return Err(e.into()),
    };

    let output_file = File::create(output)
        .map_err(|e| anyhow::anyhow!("failed to create output {}: {e}", output.display()))?;
    let mut writer = RowWriter::new(output_file, config.product_sample_size)?;

    let fetcher = build_fetcher(config)?;
    let pipeline = ShopPipeline::new(fetcher, ScrapeConfig::from_app_config(config));

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        strategy = %config.contact_strategy,
        max_concurrent_shops = config.scraper_max_concurrent_shops,
        "scraping started"
    );
    let summary = run_scrape(
        &pipeline,
        hosts,
        &mut writer,
        config.scraper_max_concurrent_shops,
    )
    .await?;
    tracing::info!(
        shops = summary.shops,
        shops_with_products = summary.shops_with_products,
        shops_with_contact = summary.shops_with_contact,
        "scraping finished"
    );
    Ok(summary)
}

pub(crate) fn build_fetcher(config: &shopmedia_core::AppConfig) -> anyhow::Result<HttpPageFetcher> {
    HttpPageFetcher::new(
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))
}

/// Runs up to `max_concurrent` shops at a time. Results come back in input
/// order, and each row is written as soon as it and all rows before it are
/// done.
pub(crate) async fn run_scrape<F, R, W>(
    pipeline: &ShopPipeline<F>,
    hosts: HostReader<R>,
    writer: &mut RowWriter<W>,
    max_concurrent: usize,
) -> anyhow::Result<RunSummary>
where
    F: PageFetcher,
    R: io::Read,
    W: io::Write,
{
    let mut results = stream::iter(hosts)
        .map(move |host| async move { pipeline.run(&host).await })
        .buffered(max_concurrent.max(1));

    let mut summary = RunSummary::default();
    while let Some(result) = results.next().await {
        writer.write(&result)?;
        summary.shops += 1;
        if result.products.iter().any(|p| !p.is_placeholder()) {
            summary.shops_with_products += 1;
        }
        if !result.contact.is_empty() {
            summary.shops_with_contact += 1;
        }
        tracing::info!(host = %result.host, "shop exported");
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
