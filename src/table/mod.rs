pub mod builtin;
pub mod cache;

pub use cache::CachedRateTable;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::error::{PricingError, Result};
use crate::models::{ContainerRate, ContainerSize, ProductVolume};

/// Where a rate table was loaded from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TableSource {
    Builtin,
    File {
        rates: PathBuf,
        products: Option<PathBuf>,
    },
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::Builtin => write!(f, "embedded table"),
            TableSource::File {
                rates,
                products: Some(products),
            } => write!(f, "{} and {}", rates.display(), products.display()),
            TableSource::File { rates, products: None } => write!(f, "{}", rates.display()),
        }
    }
}

/// Immutable container rate and product volume reference data.
///
/// Built once per session and shared by reference. Lookups are exact: no
/// trimming, case folding, or nearest-match fallback.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: Vec<ContainerRate>,
    rate_index: HashMap<(String, ContainerSize), usize>,
    products: Vec<ProductVolume>,
    product_index: HashMap<String, usize>,
    source: TableSource,
    loaded_at: DateTime<Utc>,
}

impl RateTable {
    /// Build a table, rejecting invalid values, duplicate keys and empty data.
    pub fn new(
        rates: Vec<ContainerRate>,
        products: Vec<ProductVolume>,
        source: TableSource,
    ) -> Result<Self> {
        if rates.is_empty() {
            return Err(PricingError::InvalidData(
                "rate table contains no container rates".to_string(),
            ));
        }
        if products.is_empty() {
            return Err(PricingError::InvalidData(
                "rate table contains no product volumes".to_string(),
            ));
        }

        let mut rate_index = HashMap::with_capacity(rates.len());
        for (i, rate) in rates.iter().enumerate() {
            rate.validate_values()?;
            let key = (rate.port.clone(), rate.container_size);
            if rate_index.insert(key, i).is_some() {
                return Err(PricingError::InvalidData(format!(
                    "duplicate rate for {} with {} container size",
                    rate.port, rate.container_size
                )));
            }
        }

        let mut product_index = HashMap::with_capacity(products.len());
        for (i, product) in products.iter().enumerate() {
            product.validate_values()?;
            if product_index
                .insert(product.product_type.clone(), i)
                .is_some()
            {
                return Err(PricingError::InvalidData(format!(
                    "duplicate volume for product type '{}'",
                    product.product_type
                )));
            }
        }

        Ok(Self {
            rates,
            rate_index,
            products,
            product_index,
            source,
            loaded_at: Utc::now(),
        })
    }

    /// Table built from the embedded dataset.
    pub fn builtin() -> Result<Self> {
        Self::new(
            builtin::container_rates(),
            builtin::product_volumes(),
            TableSource::Builtin,
        )
    }

    pub fn lookup_container_rate(
        &self,
        port: &str,
        container_size: ContainerSize,
    ) -> Result<&ContainerRate> {
        self.rate_index
            .get(&(port.to_string(), container_size))
            .map(|&i| &self.rates[i])
            .ok_or_else(|| PricingError::NoRateForSelection {
                port: port.to_string(),
                container_size: container_size.to_string(),
            })
    }

    pub fn lookup_product_volume(&self, product_type: &str) -> Result<f64> {
        self.product_index
            .get(product_type)
            .map(|&i| self.products[i].unit_volume_m3)
            .ok_or_else(|| PricingError::UnknownProduct {
                product_type: product_type.to_string(),
            })
    }

    /// Ports in the order they first appear.
    pub fn ports(&self) -> Vec<&str> {
        let mut ports: Vec<&str> = Vec::new();
        for rate in &self.rates {
            if !ports.contains(&rate.port.as_str()) {
                ports.push(&rate.port);
            }
        }
        ports
    }

    /// Every container size present in the table, across all ports.
    pub fn container_sizes(&self) -> Vec<ContainerSize> {
        let mut sizes: Vec<ContainerSize> = self.rates.iter().map(|r| r.container_size).collect();
        sizes.sort();
        sizes.dedup();
        sizes
    }

    /// Container sizes that have a rate from `port`.
    pub fn container_sizes_for(&self, port: &str) -> Vec<ContainerSize> {
        let mut sizes: Vec<ContainerSize> = self
            .rates
            .iter()
            .filter(|r| r.port == port)
            .map(|r| r.container_size)
            .collect();
        sizes.sort();
        sizes
    }

    pub fn product_types(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(|p| p.product_type.as_str())
            .collect()
    }

    pub fn rates(&self) -> &[ContainerRate] {
        &self.rates
    }

    pub fn products(&self) -> &[ProductVolume] {
        &self.products
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
