use tracing::debug;

use crate::error::{PricingError, Result};
use crate::models::{ContainerRate, LandedCostEstimate};
use crate::utils::constants::{DEFAULT_SOURCE_CURRENCY, DEFAULT_TARGET_CURRENCY};

/// Intermediate amounts of one landed cost computation, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub shipping_cost_per_m3: f64,
    pub freight_cost: f64,
    pub product_price_target: f64,
    pub total_landed_cost: f64,
}

/// Landed cost of one unit in the target currency.
///
/// The product price is converted first; freight is already in the target
/// currency and is added afterwards. Every quantity must be strictly positive.
pub fn compute_landed_cost(
    product_price_source: f64,
    container_rate: &ContainerRate,
    product_volume_m3: f64,
    exchange_rate: f64,
) -> Result<CostBreakdown> {
    require_positive("product price", product_price_source)?;
    require_positive("container volume", container_rate.volume_m3)?;
    require_positive("container price", container_rate.price)?;
    require_positive("product volume", product_volume_m3)?;
    require_positive("exchange rate", exchange_rate)?;

    let shipping_cost_per_m3 = container_rate.price_per_m3();
    let freight_cost = shipping_cost_per_m3 * product_volume_m3;
    let product_price_target = product_price_source * exchange_rate;

    Ok(CostBreakdown {
        shipping_cost_per_m3,
        freight_cost,
        product_price_target,
        total_landed_cost: product_price_target + freight_cost,
    })
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid_input(
            field,
            format!("{} is not a finite number", value),
        ));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid_input(
            field,
            format!("must be greater than zero, got {}", value),
        ));
    }
    Ok(())
}

/// Calculator bound to a session's exchange rate and currency pair.
#[derive(Debug, Clone)]
pub struct LandedCostCalculator {
    exchange_rate: f64,
    source_currency: String,
    target_currency: String,
}

impl LandedCostCalculator {
    pub fn new(exchange_rate: f64) -> Result<Self> {
        require_positive("exchange rate", exchange_rate)?;
        Ok(Self {
            exchange_rate,
            source_currency: DEFAULT_SOURCE_CURRENCY.to_string(),
            target_currency: DEFAULT_TARGET_CURRENCY.to_string(),
        })
    }

    pub fn with_currencies(mut self, source: &str, target: &str) -> Self {
        self.source_currency = source.to_string();
        self.target_currency = target.to_string();
        self
    }

    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    pub fn source_currency(&self) -> &str {
        &self.source_currency
    }

    pub fn target_currency(&self) -> &str {
        &self.target_currency
    }

    pub fn estimate(
        &self,
        product_type: &str,
        product_price_source: f64,
        container_rate: &ContainerRate,
        product_volume_m3: f64,
    ) -> Result<LandedCostEstimate> {
        let breakdown = compute_landed_cost(
            product_price_source,
            container_rate,
            product_volume_m3,
            self.exchange_rate,
        )?;

        debug!(
            "Landed cost for {} via {} {}: {:.4}",
            product_type,
            container_rate.port,
            container_rate.container_size,
            breakdown.total_landed_cost
        );

        Ok(LandedCostEstimate {
            port: container_rate.port.clone(),
            container_size: container_rate.container_size,
            product_type: product_type.to_string(),
            product_volume_m3,
            source_currency: self.source_currency.clone(),
            target_currency: self.target_currency.clone(),
            exchange_rate: self.exchange_rate,
            product_price_source,
            shipping_cost_per_m3: breakdown.shipping_cost_per_m3,
            freight_cost: breakdown.freight_cost,
            product_price_target: breakdown.product_price_target,
            total_landed_cost: breakdown.total_landed_cost,
        })
    }
}
