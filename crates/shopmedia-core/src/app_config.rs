/// How contact signals are chosen from the probed pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStrategy {
    /// Take the first match per signal and stop probing once every signal
    /// has one.
    FirstMatch,
    /// Collect every match from every reachable page, then pick the
    /// candidate that best resembles the shop hostname.
    Accumulate,
}

impl std::fmt::Display for ContactStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactStrategy::FirstMatch => write!(f, "first-match"),
            ContactStrategy::Accumulate => write!(f, "accumulate"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    pub scraper_max_concurrent_shops: usize,
    /// Number of product slots per shop; also fixes the output column layout.
    pub product_sample_size: usize,
    pub contact_strategy: ContactStrategy,
    /// Header name of the hostname column in the input table.
    pub input_url_column: String,
}
