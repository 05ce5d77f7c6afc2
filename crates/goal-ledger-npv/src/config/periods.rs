//! Accepted range of period counts.

use serde::{Deserialize, Serialize};

/// Bounds on the number of periods a caller may request.
///
/// From 45 periods on, the 4-decimal rounding residual folded into the last
/// entry of `BP_DELAY_PEAK_DET` exceeds that entry's own share and drives it
/// negative, so the default ceiling is 44.
///
/// The engine itself accepts any `usize` (zero yields an empty projection);
/// these bounds are enforced at the boundary by
/// [`EngineConfig::check_period_count`](super::EngineConfig::check_period_count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBounds {
    /// Smallest accepted period count.
    pub min_periods: u32,

    /// Largest accepted period count.
    pub max_periods: u32,
}

impl Default for PeriodBounds {
    fn default() -> Self {
        Self {
            min_periods: 1,
            max_periods: 44,
        }
    }
}

impl PeriodBounds {
    /// Validate the bounds.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_periods > self.max_periods {
            return Err(format!(
                "min_periods ({}) must be <= max_periods ({})",
                self.min_periods, self.max_periods
            ));
        }
        Ok(())
    }

    /// Whether `count` lies within the bounds (inclusive).
    #[inline]
    pub fn contains(&self, count: u32) -> bool {
        (self.min_periods..=self.max_periods).contains(&count)
    }
}
