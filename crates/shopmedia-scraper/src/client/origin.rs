//! URL construction for storefront hosts.

/// Builds the plain-HTTP URL for `path` on `host`.
///
/// Given `"cool-shoes.myshopify.com"` and `"/pages/about"`, returns
/// `"http://cool-shoes.myshopify.com/pages/about"`. Storefronts redirect to
/// HTTPS themselves when they need to, so the scheme is always `http`.
#[must_use]
pub fn page_url(host: &str, path: &str) -> String {
    format!("http://{host}{path}")
}
