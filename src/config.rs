use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_CONFIG_FILE, DEFAULT_EXCHANGE_RATE, DEFAULT_SOURCE_CURRENCY,
    DEFAULT_TARGET_CURRENCY, ENV_PREFIX,
};

/// Session configuration.
///
/// Layered lowest to highest: built-in defaults, the TOML config file,
/// `LANDED_COST_*` environment variables, command-line overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Source-to-target currency multiplier.
    #[validate(range(exclusive_min = 0.0))]
    pub exchange_rate: f64,

    #[validate(length(equal = 3))]
    pub source_currency: String,

    #[validate(length(equal = 3))]
    pub target_currency: String,

    /// Rates CSV; the embedded table is used when unset.
    pub rates_file: Option<PathBuf>,

    /// Product volumes CSV; the embedded catalogue is used when unset.
    pub products_file: Option<PathBuf>,

    pub cache_ttl_secs: u64,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub exchange_rate: Option<f64>,
    pub rates_file: Option<PathBuf>,
    pub products_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            source_currency: DEFAULT_SOURCE_CURRENCY.to_string(),
            target_currency: DEFAULT_TARGET_CURRENCY.to_string(),
            rates_file: None,
            products_file: None,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl AppConfig {
    /// Load configuration. An explicit `config_file` must exist; otherwise
    /// `landed-cost.toml` in the working directory is read if present.
    pub fn load(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        Self::load_with_env_prefix(config_file, overrides, ENV_PREFIX)
    }

    pub fn load_with_env_prefix(
        config_file: Option<&Path>,
        overrides: &ConfigOverrides,
        env_prefix: &str,
    ) -> Result<Self> {
        let file_source = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .set_default("exchange_rate", DEFAULT_EXCHANGE_RATE)?
            .set_default("source_currency", DEFAULT_SOURCE_CURRENCY)?
            .set_default("target_currency", DEFAULT_TARGET_CURRENCY)?
            .set_default("cache_ttl_secs", DEFAULT_CACHE_TTL_SECS as i64)?
            .add_source(file_source)
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .set_override_option("exchange_rate", overrides.exchange_rate)?
            .set_override_option("rates_file", path_value(&overrides.rates_file))?
            .set_override_option("products_file", path_value(&overrides.products_file))?
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn path_value(path: &Option<PathBuf>) -> Option<String> {
    path.as_ref().map(|p| p.to_string_lossy().into_owned())
}
