/// Currency defaults
pub const DEFAULT_EXCHANGE_RATE: f64 = 1.66;
pub const DEFAULT_SOURCE_CURRENCY: &str = "USD";
pub const DEFAULT_TARGET_CURRENCY: &str = "NZD";

/// File names
pub const DEFAULT_CONFIG_FILE: &str = "landed-cost.toml";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LANDED_COST";

/// Rate table cache
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Logging
pub const DEFAULT_LOG_FILTER: &str = "landed_cost=info";
pub const VERBOSE_LOG_FILTER: &str = "landed_cost=debug,info";
