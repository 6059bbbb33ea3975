//! Picks the most plausible social link among several scraped candidates.
//!
//! Whole-page regex scraping routinely turns up links that have nothing to
//! do with the shop (platform footer badges, app vendors, embedded widgets).
//! Candidates are scored by how many hostname tokens they contain; the best
//! score wins, and ties are broken at random.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use percent_encoding::percent_decode_str;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Resolves candidate lists to a single answer.
///
/// The random source used for tie-breaking is injectable so callers can pin
/// outcomes; the default is an OS-seeded [`StdRng`].
#[derive(Debug)]
pub struct SocialResolver<R = StdRng> {
    rng: Mutex<R>,
}

impl SocialResolver<StdRng> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A resolver whose tie-breaks are reproducible for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for SocialResolver<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> SocialResolver<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Returns the candidate most similar to `host`, or `None` when there
    /// are no candidates.
    ///
    /// The returned string is the original candidate, not its normalized
    /// form. When several candidates share the top score one of them is
    /// chosen uniformly at random; duplicates count as separate entries.
    pub fn resolve(&self, candidates: &[String], host: &str) -> Option<String> {
        let winners = top_scored(candidates, host);
        match winners.as_slice() {
            [] => None,
            [only] => Some((*only).to_owned()),
            _ => {
                let index = {
                    let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
                    rng.random_range(0..winners.len())
                };
                Some(winners[index].to_owned())
            }
        }
    }
}

/// Tokens a candidate is scored against: the first hostname label split on
/// `-`. `cool-shoes.myshop.com` yields `["cool", "shoes"]`.
#[must_use]
pub fn scoring_tokens(host: &str) -> Vec<&str> {
    let label = host.split_once('.').map_or(host, |(first, _)| first);
    label.split('-').collect()
}

/// Number of distinct tokens found in the percent-decoded, trimmed,
/// lowercased candidate. Each token counts at most once.
#[must_use]
pub fn score_candidate(candidate: &str, tokens: &[&str]) -> usize {
    let decoded = percent_decode_str(candidate).decode_utf8_lossy();
    let normalized = decoded.trim().to_lowercase();
    tokens
        .iter()
        .filter(|token| normalized.contains(*token))
        .count()
}

fn top_scored<'a>(candidates: &'a [String], host: &str) -> Vec<&'a str> {
    let tokens = scoring_tokens(host);
    let mut by_score: BTreeMap<usize, Vec<&'a str>> = BTreeMap::new();
    for candidate in candidates {
        let score = score_candidate(candidate, &tokens);
        by_score.entry(score).or_default().push(candidate.as_str());
    }
    by_score
        .pop_last()
        .map(|(_, winners)| winners)
        .unwrap_or_default()
}
