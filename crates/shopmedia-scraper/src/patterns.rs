//! Regular-expression scanning of raw response bodies.
//!
//! Bodies are never parsed as HTML; every signal is a plain pattern match
//! over the text, so links inside scripts, JSON blobs and attributes are all
//! found. Matches are returned exactly as they appear in the source.

use std::sync::LazyLock;

use regex::Regex;
use shopmedia_core::SignalKind;

static TWITTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?twitter\.com/[a-zA-Z0-9\-._]*").expect("valid twitter regex")
});
static FACEBOOK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?facebook\.com/[a-zA-Z0-9\-._]*")
        .expect("valid facebook regex")
});
// Lowercase only: mixed-case addresses are not picked up.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9\-.]+@[a-z.]+").expect("valid email regex"));
static PRODUCT_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"/collections/all/products/[^"]+"#).expect("valid product link regex")
});

/// A named extraction pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Twitter,
    Facebook,
    Email,
    /// Relative product path under the `all` collection, up to the next `"`.
    ProductLink,
}

impl From<SignalKind> for Pattern {
    fn from(kind: SignalKind) -> Self {
        match kind {
            SignalKind::Twitter => Pattern::Twitter,
            SignalKind::Facebook => Pattern::Facebook,
            SignalKind::Email => Pattern::Email,
        }
    }
}

impl Pattern {
    fn regex(self) -> &'static Regex {
        match self {
            Pattern::Twitter => &*TWITTER_RE,
            Pattern::Facebook => &*FACEBOOK_RE,
            Pattern::Email => &*EMAIL_RE,
            Pattern::ProductLink => &*PRODUCT_LINK_RE,
        }
    }

    /// Every non-overlapping match in `body`, in order of appearance.
    #[must_use]
    pub fn find_all(self, body: &str) -> Vec<String> {
        self.regex()
            .find_iter(body)
            .map(|m| m.as_str().to_owned())
            .collect()
    }

    /// The first match in `body`, if any.
    #[must_use]
    pub fn find_first(self, body: &str) -> Option<String> {
        self.regex().find(body).map(|m| m.as_str().to_owned())
    }
}
