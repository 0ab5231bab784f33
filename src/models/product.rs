use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{PricingError, Result};

/// Physical space one unit of a product type occupies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductVolume {
    #[validate(length(min = 1))]
    pub product_type: String,

    #[validate(range(exclusive_min = 0.0))]
    pub unit_volume_m3: f64,
}

impl ProductVolume {
    pub fn new(product_type: String, unit_volume_m3: f64) -> Self {
        Self {
            product_type,
            unit_volume_m3,
        }
    }

    pub fn validate_values(&self) -> Result<()> {
        if !self.unit_volume_m3.is_finite() {
            return Err(PricingError::InvalidData(format!(
                "{}: volume must be a finite number",
                self.product_type
            )));
        }
        self.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_volume_validation() {
        assert!(ProductVolume::new("Dawn Sofa".to_string(), 2.5)
            .validate_values()
            .is_ok());
        assert!(ProductVolume::new("Dawn Sofa".to_string(), 0.0)
            .validate_values()
            .is_err());
        assert!(ProductVolume::new("".to_string(), 1.0)
            .validate_values()
            .is_err());
        assert!(ProductVolume::new("Dawn Sofa".to_string(), f64::INFINITY)
            .validate_values()
            .is_err());
    }
}
