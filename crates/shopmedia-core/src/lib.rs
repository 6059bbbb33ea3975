pub mod app_config;
pub mod config;
pub mod contact;
pub mod shop;

use thiserror::Error;

pub use app_config::{AppConfig, ContactStrategy};
pub use config::{load_app_config, load_app_config_from_env};
pub use contact::{ResolvedContact, SignalKind};
pub use shop::{output_columns, ProductRecord, ShopResult, DEFAULT_PRODUCT_SAMPLE_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
