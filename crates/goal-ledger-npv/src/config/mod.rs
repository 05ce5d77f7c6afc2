//! Engine configuration types.
//!
//! The top-level [`EngineConfig`] aggregates the settings for each stage of
//! the projection pipeline:
//!
//! - [`DiscountConfig`]: annual discount rate (default `0.10`)
//! - [`RoundingConfig`]: fixed precision per stage (4 / 2 / 4 / 2 decimals)
//! - [`PeriodBounds`]: accepted period counts at the boundary

mod discount;
mod periods;
mod rounding;


pub use self::discount::{DiscountConfig, DEFAULT_DISCOUNT_RATE};
pub use self::periods::PeriodBounds;
pub use self::rounding::{RoundingConfig, MAX_DECIMALS};

use serde::{Deserialize, Serialize};

use crate::error::{NpvError, NpvResult};

/// Main engine configuration containing all stage settings.
///
/// # Example
///
/// ```
/// use goal_ledger_npv::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.discount.annual_rate, 0.10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Discounting settings.
    #[serde(default)]
    pub discount: DiscountConfig,

    /// Rounding precision per stage.
    #[serde(default)]
    pub rounding: RoundingConfig,

    /// Accepted period counts.
    #[serde(default)]
    pub periods: PeriodBounds,

    /// Emit per-period trace events while projecting.
    #[serde(default)]
    pub debug: bool,
}

impl EngineConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with a different annual discount rate.
    pub fn with_discount_rate(annual_rate: f64) -> Self {
        Self {
            discount: DiscountConfig { annual_rate },
            ..Default::default()
        }
    }

    /// Parse a configuration from JSON. Missing sections take their defaults.
    pub fn from_json_str(json: &str) -> NpvResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(NpvError::ConfigError)?;
        Ok(config)
    }

    /// Validate the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.discount.validate()?;
        self.rounding.validate()?;
        self.periods.validate()?;
        Ok(())
    }

    /// Check a caller-supplied period count before it reaches the engine.
    ///
    /// Negative counts are always rejected. Zero is accepted and produces an
    /// empty projection. Positive counts must lie within [`PeriodBounds`].
    ///
    /// ```
    /// use goal_ledger_npv::config::EngineConfig;
    ///
    /// let config = EngineConfig::default();
    /// assert_eq!(config.check_period_count(5).unwrap(), 5);
    /// assert_eq!(config.check_period_count(0).unwrap(), 0);
    /// assert!(config.check_period_count(-1).is_err());
    /// ```
    pub fn check_period_count(&self, requested: i64) -> NpvResult<usize> {
        if requested < 0 {
            return Err(NpvError::invalid_periods(
                requested,
                "period count cannot be negative",
            ));
        }
        if requested == 0 {
            return Ok(0);
        }
        let count = u32::try_from(requested)
            .ok()
            .filter(|c| self.periods.contains(*c))
            .ok_or_else(|| {
                NpvError::invalid_periods(
                    requested,
                    format!(
                        "period count must be in [{}, {}]",
                        self.periods.min_periods, self.periods.max_periods
                    ),
                )
            })?;
        Ok(count as usize)
    }
}
