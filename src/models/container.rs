use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::{PricingError, Result};

/// ISO container size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContainerSize {
    #[serde(rename = "20GP")]
    Gp20,
    #[serde(rename = "40GP")]
    Gp40,
    #[serde(rename = "40HC")]
    Hc40,
    #[serde(rename = "45HC")]
    Hc45,
}

impl ContainerSize {
    pub const ALL: [ContainerSize; 4] = [
        ContainerSize::Gp20,
        ContainerSize::Gp40,
        ContainerSize::Hc40,
        ContainerSize::Hc45,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ContainerSize::Gp20 => "20GP",
            ContainerSize::Gp40 => "40GP",
            ContainerSize::Hc40 => "40HC",
            ContainerSize::Hc45 => "45HC",
        }
    }
}

impl fmt::Display for ContainerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ContainerSize {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_uppercase();
        ContainerSize::ALL
            .into_iter()
            .find(|size| size.code() == code)
            .ok_or_else(|| {
                PricingError::invalid_input(
                    "container size",
                    format!(
                        "'{}' is not a known container size (expected one of {})",
                        s.trim(),
                        ContainerSize::ALL.map(|size| size.code()).join(", ")
                    ),
                )
            })
    }
}

/// Freight price and usable volume of one full container from a port.
///
/// The price is held in the target currency. Price per cubic metre is always
/// derived from `price / volume_m3`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContainerRate {
    #[validate(length(min = 1))]
    pub port: String,

    pub container_size: ContainerSize,

    #[validate(range(exclusive_min = 0.0))]
    pub volume_m3: f64,

    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
}

impl ContainerRate {
    pub fn new(port: String, container_size: ContainerSize, volume_m3: f64, price: f64) -> Self {
        Self {
            port,
            container_size,
            volume_m3,
            price,
        }
    }

    pub fn price_per_m3(&self) -> f64 {
        self.price / self.volume_m3
    }

    /// Range validation plus finiteness, which `validator` does not check.
    pub fn validate_values(&self) -> Result<()> {
        if !self.volume_m3.is_finite() || !self.price.is_finite() {
            return Err(PricingError::InvalidData(format!(
                "{} {}: volume and price must be finite numbers",
                self.port, self.container_size
            )));
        }
        self.validate()?;
        Ok(())
    }
}
