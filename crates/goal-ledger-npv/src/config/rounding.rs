//! Fixed-precision rounding settings.
//!
//! Every stage rounds to a fixed number of decimal places. The defaults
//! reproduce the reference projection exactly; changing them changes every
//! numeric output.

use serde::{Deserialize, Serialize};

/// Upper bound on any configured precision.
pub const MAX_DECIMALS: u32 = 10;

/// Decimal precision used at each stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingConfig {
    /// Precision of normalized profile fractions.
    pub distribution_decimals: u32,

    /// Precision of monetary/point values in period results
    /// (gross benefit, gross cost, net points, NPV, accumulated NPV).
    pub value_decimals: u32,

    /// Precision of the reported discount factor.
    pub factor_decimals: u32,

    /// Precision of per-entity periodized arrays. `None` keeps the raw
    /// product of fraction and total.
    pub periodized_decimals: Option<u32>,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            distribution_decimals: 4,
            value_decimals: 2,
            factor_decimals: 4,
            periodized_decimals: Some(2),
        }
    }
}

impl RoundingConfig {
    /// Validate the rounding configuration.
    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            ("distribution_decimals", Some(self.distribution_decimals)),
            ("value_decimals", Some(self.value_decimals)),
            ("factor_decimals", Some(self.factor_decimals)),
            ("periodized_decimals", self.periodized_decimals),
        ];
        for (name, decimals) in checks {
            if let Some(d) = decimals {
                if d > MAX_DECIMALS {
                    return Err(format!("{name} must be <= {MAX_DECIMALS}, got {d}"));
                }
            }
        }
        Ok(())
    }
}
