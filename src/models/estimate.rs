use serde::{Deserialize, Serialize};

use crate::models::ContainerSize;

/// Breakdown of one landed cost computation.
///
/// All amounts are kept at full precision; rounding happens in [`summary`](Self::summary)
/// and the other display helpers only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandedCostEstimate {
    pub port: String,
    pub container_size: ContainerSize,
    pub product_type: String,
    pub product_volume_m3: f64,
    pub source_currency: String,
    pub target_currency: String,
    pub exchange_rate: f64,
    pub product_price_source: f64,
    pub shipping_cost_per_m3: f64,
    pub freight_cost: f64,
    pub product_price_target: f64,
    pub total_landed_cost: f64,
}

impl LandedCostEstimate {
    /// One-line result shown to the user.
    pub fn summary(&self) -> String {
        format!(
            "The estimated landed cost for {} in {} is: ${:.2}",
            self.product_type, self.target_currency, self.total_landed_cost
        )
    }

    pub fn detailed_summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str(&format!(
            "Route: {} ({} container)\n",
            self.port, self.container_size
        ));
        summary.push_str(&format!(
            "Product: {} ({} m3 per unit)\n",
            self.product_type, self.product_volume_m3
        ));
        summary.push_str(&format!(
            "Freight per m3: {:.2} {}\n",
            self.shipping_cost_per_m3, self.target_currency
        ));
        summary.push_str(&format!(
            "Freight for product: {:.2} {}\n",
            self.freight_cost, self.target_currency
        ));
        summary.push_str(&format!(
            "Product price: {:.2} {} x {} = {:.2} {}\n",
            self.product_price_source,
            self.source_currency,
            self.exchange_rate,
            self.product_price_target,
            self.target_currency
        ));
        summary.push_str(&self.summary());
        summary
    }
}
