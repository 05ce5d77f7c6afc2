//! Cost profile shapes.
//!
//! ```text
//! SP_UNIFORM_COST        ████████   equal every period
//! SP_HIGH_DEV_LOW_DEC    ██▄▃▃▂▂▂   heavy build quarter, then decaying run cost
//! SP_DEV1_UNIFORM        █▂▂▂▂▂▂▂   one-off build, flat run cost
//! SP_DEV1_DECREASING     █▂▂▂▁▁▁▁   one-off build, decaying run cost
//! SP_LOW_DEV_INCREASING  ▃▂▂▂▃▃▃▄   small build, growing run cost
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distribution::{round_index, Distribution};
use crate::error::NpvError;

use super::ProfileAxis;

/// Registered cost shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CostProfile {
    /// Equal weight in every period.
    #[default]
    #[serde(rename = "SP_UNIFORM_COST")]
    Uniform,

    /// Weight 10 for the first `max(1, round(n * 0.25))` periods, then a rate
    /// starting at 5 and decaying by `0.8` per period, floored at 1.
    #[serde(rename = "SP_HIGH_DEV_LOW_DEC")]
    HighDevLowDec,

    /// Weight 50 in the first period, 10 in every later period.
    #[serde(rename = "SP_DEV1_UNIFORM")]
    Dev1Uniform,

    /// Weight 50 in the first period, then a rate starting at 10 and decaying
    /// by `0.85` per period, floored at 1.
    #[serde(rename = "SP_DEV1_DECREASING")]
    Dev1Decreasing,

    /// Weight 10 in the first period, then a rate starting at 5 and growing
    /// by `1.15` per period without bound.
    #[serde(rename = "SP_LOW_DEV_INCREASING")]
    LowDevIncreasing,
}

impl CostProfile {
    /// All cost profiles in registration order. The first is the default.
    pub const ALL: [CostProfile; 5] = [
        CostProfile::Uniform,
        CostProfile::HighDevLowDec,
        CostProfile::Dev1Uniform,
        CostProfile::Dev1Decreasing,
        CostProfile::LowDevIncreasing,
    ];

    /// All cost profiles in registration order.
    #[inline]
    pub fn all() -> &'static [CostProfile] {
        &Self::ALL
    }

    /// Stable registry key.
    #[inline]
    pub fn key(&self) -> &'static str {
        match self {
            CostProfile::Uniform => "SP_UNIFORM_COST",
            CostProfile::HighDevLowDec => "SP_HIGH_DEV_LOW_DEC",
            CostProfile::Dev1Uniform => "SP_DEV1_UNIFORM",
            CostProfile::Dev1Decreasing => "SP_DEV1_DECREASING",
            CostProfile::LowDevIncreasing => "SP_LOW_DEV_INCREASING",
        }
    }

    /// Short name for profile pickers.
    pub fn label(&self) -> &'static str {
        match self {
            CostProfile::Uniform => "Uniform",
            CostProfile::HighDevLowDec => "High development, low decreasing",
            CostProfile::Dev1Uniform => "First-period development, uniform upkeep",
            CostProfile::Dev1Decreasing => "First-period development, decreasing upkeep",
            CostProfile::LowDevIncreasing => "Low development, increasing upkeep",
        }
    }

    /// One-line explanation of the shape.
    pub fn description(&self) -> &'static str {
        match self {
            CostProfile::Uniform => "Cost is incurred evenly across all periods.",
            CostProfile::HighDevLowDec => {
                "Heavy development cost over the first quarter, then maintenance that tapers off."
            }
            CostProfile::Dev1Uniform => {
                "A large development cost in the first period followed by steady maintenance."
            }
            CostProfile::Dev1Decreasing => {
                "A large development cost in the first period followed by shrinking maintenance."
            }
            CostProfile::LowDevIncreasing => {
                "A small development cost followed by maintenance that grows every period."
            }
        }
    }

    /// Look up a profile by its registry key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Look up a profile by key, substituting the default for unknown keys.
    pub fn from_key_or_default(key: &str) -> Self {
        match Self::from_key(key) {
            Some(profile) => profile,
            None => {
                let fallback = Self::default();
                tracing::warn!(
                    key,
                    fallback = fallback.key(),
                    "unknown cost profile key, using default"
                );
                fallback
            }
        }
    }

    /// Un-normalized weights for `periods` periods.
    #[inline]
    pub fn raw_weights(&self, periods: usize) -> Vec<f64> {
        (self.generator())(periods)
    }

    /// Normalized distribution for `periods` periods.
    pub fn generate(&self, periods: usize) -> Distribution {
        Distribution::normalize(self.raw_weights(periods))
    }

    fn generator(&self) -> fn(usize) -> Vec<f64> {
        match self {
            CostProfile::Uniform => uniform,
            CostProfile::HighDevLowDec => high_dev_low_dec,
            CostProfile::Dev1Uniform => dev1_uniform,
            CostProfile::Dev1Decreasing => dev1_decreasing,
            CostProfile::LowDevIncreasing => low_dev_increasing,
        }
    }
}

impl fmt::Display for CostProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CostProfile {
    type Err = NpvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| NpvError::unknown_profile(ProfileAxis::Cost, s))
    }
}

const DEV_WEIGHT: f64 = 50.0;
const UPKEEP_FLOOR: f64 = 1.0;

fn uniform(n: usize) -> Vec<f64> {
    vec![1.0; n]
}

fn high_dev_low_dec(n: usize) -> Vec<f64> {
    let dev_periods = round_index(n as f64 * 0.25).max(1);
    (0..n)
        .map(|i| {
            if i < dev_periods {
                10.0
            } else {
                (5.0 * 0.8f64.powi((i - dev_periods) as i32)).max(UPKEEP_FLOOR)
            }
        })
        .collect()
}

fn dev1_uniform(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| if i == 0 { DEV_WEIGHT } else { 10.0 })
        .collect()
}

fn dev1_decreasing(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            if i == 0 {
                DEV_WEIGHT
            } else {
                (10.0 * 0.85f64.powi((i - 1) as i32)).max(UPKEEP_FLOOR)
            }
        })
        .collect()
}

fn low_dev_increasing(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            if i == 0 {
                10.0
            } else {
                5.0 * 1.15f64.powi((i - 1) as i32)
            }
        })
        .collect()
}
