use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PricingError, Result};
use crate::models::{ContainerSize, LandedCostEstimate};
use crate::processors::LandedCostCalculator;
use crate::table::RateTable;

/// Raw selections and entries as supplied by the interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub port: String,
    pub container_size: String,
    pub product_type: String,
    pub price: String,
}

impl QuoteRequest {
    pub fn new(port: &str, container_size: &str, product_type: &str, price: &str) -> Self {
        Self {
            port: port.to_string(),
            container_size: container_size.to_string(),
            product_type: product_type.to_string(),
            price: price.to_string(),
        }
    }

    pub fn parse_container_size(&self) -> Result<ContainerSize> {
        self.container_size.parse()
    }

    pub fn parse_price(&self) -> Result<f64> {
        let raw = self.price.trim();
        raw.parse::<f64>().map_err(|_| {
            PricingError::invalid_input("product price", format!("'{}' is not a number", raw))
        })
    }
}

/// Resolves a [`QuoteRequest`] against a rate table and computes the estimate.
pub struct Quoter {
    calculator: LandedCostCalculator,
}

impl Quoter {
    pub fn new(calculator: LandedCostCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &LandedCostCalculator {
        &self.calculator
    }

    pub fn quote(&self, table: &RateTable, request: &QuoteRequest) -> Result<LandedCostEstimate> {
        let port = request.port.trim();
        let product_type = request.product_type.trim();
        let container_size = request.parse_container_size()?;
        let price = request.parse_price()?;

        let rate = table.lookup_container_rate(port, container_size)?;
        let product_volume = table.lookup_product_volume(product_type)?;

        let estimate = self
            .calculator
            .estimate(product_type, price, rate, product_volume)?;

        info!(
            "Quoted {} from {} ({}): {:.2} {}",
            estimate.product_type,
            estimate.port,
            estimate.container_size,
            estimate.total_landed_cost,
            estimate.target_currency
        );
        Ok(estimate)
    }
}

/// Message shown to the user for a quote outcome.
pub fn render(result: &Result<LandedCostEstimate>) -> String {
    match result {
        Ok(estimate) => estimate.summary(),
        Err(e) => {
            warn!("Quote failed: {}", e);
            render_error(e)
        }
    }
}

pub fn render_error(err: &PricingError) -> String {
    match err {
        PricingError::NoRateForSelection {
            port,
            container_size,
        } => format!(
            "No data found for {} with {} container size.",
            port, container_size
        ),
        PricingError::UnknownProduct { product_type } => format!(
            "No volume is configured for product type '{}'. Choose one of the listed product types.",
            product_type
        ),
        PricingError::InvalidInput { field, message } => {
            format!("Please provide a valid {}: {}.", field, message)
        }
        PricingError::DataUnavailable { .. } | PricingError::Serialization(_) => err.to_string(),
        PricingError::Config(_) | PricingError::Validation(_) => {
            format!("Invalid configuration: {}", err)
        }
        PricingError::Io(_) | PricingError::Csv(_) | PricingError::InvalidData(_) => {
            format!("Pricing data unavailable: {}", err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn quoter() -> Quoter {
        Quoter::new(LandedCostCalculator::new(1.66).unwrap())
    }

    #[test]
    fn test_quote_dawn_sofa() {
        let table = RateTable::builtin().unwrap();
        let request = QuoteRequest::new("Fuzhou FZG", "20GP", "Dawn Sofa", "1000.00");

        let result = quoter().quote(&table, &request);
        assert_eq!(
            render(&result),
            "The estimated landed cost for Dawn Sofa in NZD is: $2140.28"
        );
    }

    #[test]
    fn test_quote_trims_interface_input() {
        let table = RateTable::builtin().unwrap();
        let request = QuoteRequest::new(" Fuzhou FZG ", "20gp", " Hudson Mug", " 1000 ");
        let estimate = quoter().quote(&table, &request).unwrap();
        assert!((estimate.freight_cost - 0.28).abs() < 0.005);
    }

    #[test]
    fn test_no_rate_for_selection() {
        let table = RateTable::builtin().unwrap();
        let request = QuoteRequest::new("Jiujiang JIU", "40HC", "Dawn Sofa", "1000");

        let result = quoter().quote(&table, &request);
        assert_eq!(
            result.as_ref().unwrap_err().kind(),
            ErrorKind::NoRateForSelection
        );
        assert_eq!(
            render(&result),
            "No data found for Jiujiang JIU with 40HC container size."
        );
    }

    #[test]
    fn test_negative_price_produces_no_number() {
        let table = RateTable::builtin().unwrap();
        let request = QuoteRequest::new("Fuzhou FZG", "20GP", "Dawn Sofa", "-5");

        let result = quoter().quote(&table, &request);
        assert_eq!(result.as_ref().unwrap_err().kind(), ErrorKind::InvalidInput);

        let message = render(&result);
        assert!(message.starts_with("Please provide a valid product price"));
        assert!(!message.contains('$'));
    }

    #[test]
    fn test_unparseable_inputs() {
        let table = RateTable::builtin().unwrap();

        let bad_price = QuoteRequest::new("Fuzhou FZG", "20GP", "Dawn Sofa", "ten");
        let err = quoter().quote(&table, &bad_price).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let bad_size = QuoteRequest::new("Fuzhou FZG", "10FT", "Dawn Sofa", "10");
        let err = quoter().quote(&table, &bad_size).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_render_load_and_config_errors() {
        let missing = PricingError::DataUnavailable {
            path: std::path::PathBuf::from("missing/rates.csv"),
            reason: "file not found".to_string(),
        };
        assert_eq!(
            render_error(&missing),
            "Pricing data unavailable from missing/rates.csv: file not found"
        );

        let overrides = crate::config::ConfigOverrides {
            exchange_rate: Some(-1.0),
            ..Default::default()
        };
        let err = crate::config::AppConfig::load_with_env_prefix(
            None,
            &overrides,
            "LANDED_COST_TEST_RENDER",
        )
        .unwrap_err();
        let message = render_error(&err);
        assert!(message.starts_with("Invalid configuration: "));
        assert!(message.contains("exchange_rate"));
        assert!(!message.contains("Pricing data unavailable"));
    }

    #[test]
    fn test_unknown_product_is_not_zero_freight() {
        let table = RateTable::builtin().unwrap();
        let request = QuoteRequest::new("Fuzhou FZG", "20GP", "Floor Lamp", "1000");

        let result = quoter().quote(&table, &request);
        assert_eq!(result.as_ref().unwrap_err().kind(), ErrorKind::InvalidInput);
        assert!(render(&result).contains("Floor Lamp"));
    }
}
