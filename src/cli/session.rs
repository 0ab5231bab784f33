use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::error::Result;
use crate::models::LandedCostEstimate;
use crate::processors::{LandedCostCalculator, QuoteRequest, Quoter};
use crate::table::{CachedRateTable, RateTable};

enum TableProvider {
    Embedded(Arc<RateTable>),
    File(CachedRateTable),
}

/// One user session: configuration, calculator and rate table source.
///
/// The table is loaded when the session starts so a missing data file is
/// reported before any selection is made.
pub struct Session {
    config: AppConfig,
    quoter: Quoter,
    provider: TableProvider,
}

impl Session {
    pub fn start(config: AppConfig) -> Result<Self> {
        let calculator = LandedCostCalculator::new(config.exchange_rate)?
            .with_currencies(&config.source_currency, &config.target_currency);

        let mut provider = match &config.rates_file {
            Some(rates_path) => {
                let cache = CachedRateTable::new(
                    rates_path.clone(),
                    config.products_file.clone(),
                    config.cache_ttl(),
                );
                info!(
                    "Using rate table from {} (reloaded every {:?})",
                    rates_path.display(),
                    cache.ttl()
                );
                TableProvider::File(cache)
            }
            None => {
                info!("Using embedded rate table");
                TableProvider::Embedded(Arc::new(RateTable::builtin()?))
            }
        };
        provider.table()?;

        Ok(Self {
            config,
            quoter: Quoter::new(calculator),
            provider,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current rate table; file-backed tables are reloaded once stale.
    pub fn table(&mut self) -> Result<Arc<RateTable>> {
        self.provider.table()
    }

    pub fn quote(&mut self, request: &QuoteRequest) -> Result<LandedCostEstimate> {
        let table = self.table()?;
        self.quoter.quote(&table, request)
    }
}

impl TableProvider {
    fn table(&mut self) -> Result<Arc<RateTable>> {
        match self {
            TableProvider::Embedded(table) => Ok(Arc::clone(table)),
            TableProvider::File(cache) => cache.get(),
        }
    }
}
