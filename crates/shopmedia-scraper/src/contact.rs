//! Contact signal scraping across a shop's well-known pages.

use std::collections::HashMap;

use shopmedia_core::{ContactStrategy, ResolvedContact, SignalKind};

use crate::client::{fetch_body, page_url, PageFetcher};
use crate::patterns::Pattern;
use crate::resolver::SocialResolver;

/// Probes `endpoints` in order and fills a [`ResolvedContact`].
///
/// An endpoint that fails (non-2xx or transport error) is logged and
/// skipped; it never aborts the shop. See [`ContactStrategy`] for how the
/// matches of successive pages are combined.
pub struct ContactInfoScraper<'a, F> {
    fetcher: &'a F,
    resolver: &'a SocialResolver,
    endpoints: &'a [String],
    strategy: ContactStrategy,
}

impl<'a, F: PageFetcher> ContactInfoScraper<'a, F> {
    pub fn new(
        fetcher: &'a F,
        resolver: &'a SocialResolver,
        endpoints: &'a [String],
        strategy: ContactStrategy,
    ) -> Self {
        Self {
            fetcher,
            resolver,
            endpoints,
            strategy,
        }
    }

    pub async fn scrape(&self, host: &str) -> ResolvedContact {
        let contact = match self.strategy {
            ContactStrategy::FirstMatch => self.scrape_first_match(host).await,
            ContactStrategy::Accumulate => self.scrape_accumulate(host).await,
        };
        for kind in SignalKind::ALL {
            if contact.get(kind).is_none() {
                tracing::info!(host, signal = %kind, "no candidate found");
            }
        }
        contact
    }

    /// Records the first match of each signal verbatim and stops as soon as
    /// every signal has one.
    async fn scrape_first_match(&self, host: &str) -> ResolvedContact {
        let mut contact = ResolvedContact::default();
        let mut outstanding: Vec<SignalKind> = SignalKind::ALL.to_vec();

        for endpoint in self.endpoints {
            if outstanding.is_empty() {
                break;
            }
            let Some(body) = self.fetch_endpoint(host, endpoint).await else {
                continue;
            };
            outstanding.retain(|&kind| match Pattern::from(kind).find_first(&body) {
                Some(found) => {
                    tracing::debug!(host, endpoint = %endpoint, signal = %kind, value = %found, "signal found");
                    contact.set(kind, Some(found));
                    false
                }
                None => true,
            });
        }

        contact
    }

    /// Collects every match from every reachable endpoint, then resolves
    /// each signal's candidates against the hostname.
    async fn scrape_accumulate(&self, host: &str) -> ResolvedContact {
        let mut candidates: HashMap<SignalKind, Vec<String>> = HashMap::new();

        for endpoint in self.endpoints {
            let Some(body) = self.fetch_endpoint(host, endpoint).await else {
                continue;
            };
            for kind in SignalKind::ALL {
                candidates
                    .entry(kind)
                    .or_default()
                    .extend(Pattern::from(kind).find_all(&body));
            }
        }

        let mut contact = ResolvedContact::default();
        for kind in SignalKind::ALL {
            let found = candidates.remove(&kind).unwrap_or_default();
            tracing::debug!(host, signal = %kind, candidates = found.len(), "resolving signal");
            contact.set(kind, self.resolver.resolve(&found, host));
        }
        contact
    }

    async fn fetch_endpoint(&self, host: &str, endpoint: &str) -> Option<String> {
        let url = page_url(host, endpoint);
        match fetch_body(self.fetcher, &url).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(host, url = %url, error = %e, "skipping contact endpoint");
                None
            }
        }
    }
}
