//! Discounting settings.

use serde::{Deserialize, Serialize};

/// Default annual discount rate applied uniformly to every period.
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.10;

/// Time-discounting settings.
///
/// A single rate is used for every period; periods are uniform compounding
/// units, so period `p` is discounted by `1 / (1 + annual_rate)^p`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// Annual discount rate as a fraction (`0.10` = 10%).
    /// Must be finite and greater than `-1.0`.
    pub annual_rate: f64,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            annual_rate: DEFAULT_DISCOUNT_RATE,
        }
    }
}

impl DiscountConfig {
    /// Validate the discount configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.annual_rate.is_finite() {
            return Err(format!(
                "annual_rate must be finite, got {}",
                self.annual_rate
            ));
        }
        if self.annual_rate <= -1.0 {
            return Err(format!(
                "annual_rate must be > -1.0, got {}",
                self.annual_rate
            ));
        }
        Ok(())
    }
}
