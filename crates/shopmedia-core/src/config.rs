use crate::app_config::{AppConfig, ContactStrategy};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("SHOPMEDIA_LOG_LEVEL", "info");

    let scraper_request_timeout_secs = parse_u64("SHOPMEDIA_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_user_agent = or_default(
        "SHOPMEDIA_USER_AGENT",
        "shopmedia/0.1 (storefront-contacts)",
    );
    let scraper_max_concurrent_shops = parse_usize("SHOPMEDIA_MAX_CONCURRENT_SHOPS", "1")?;

    let product_sample_size = parse_usize(
        "SHOPMEDIA_PRODUCT_SAMPLE_SIZE",
        &crate::DEFAULT_PRODUCT_SAMPLE_SIZE.to_string(),
    )?;
    if product_sample_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPMEDIA_PRODUCT_SAMPLE_SIZE".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let contact_strategy =
        parse_contact_strategy(&or_default("SHOPMEDIA_CONTACT_STRATEGY", "first-match"))?;

    let input_url_column = or_default("SHOPMEDIA_INPUT_URL_COLUMN", "url");
    if input_url_column.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPMEDIA_INPUT_URL_COLUMN".to_string(),
            reason: "column name must not be empty".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        scraper_request_timeout_secs,
        scraper_user_agent,
        scraper_max_concurrent_shops,
        product_sample_size,
        contact_strategy,
        input_url_column,
    })
}

/// Parse a string into a `ContactStrategy` variant.
fn parse_contact_strategy(s: &str) -> Result<ContactStrategy, ConfigError> {
    match s {
        "first-match" => Ok(ContactStrategy::FirstMatch),
        "accumulate" => Ok(ContactStrategy::Accumulate),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SHOPMEDIA_CONTACT_STRATEGY".to_string(),
            reason: format!("expected \"first-match\" or \"accumulate\", got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
