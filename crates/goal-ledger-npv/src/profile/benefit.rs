//! Benefit profile shapes.
//!
//! Each shape describes how an item's total benefit is released over the
//! projection horizon, from immediate and flat to delayed and peaking.
//!
//! ```text
//! BP_UNIFORM         ████████   equal every period
//! BP_DELAY_UNIFORM   __██████   nothing for the first quarter, then equal
//! BP_DELAY_PLATEAU   ▃▃▃▃▆▆▆▆   low first half, high second half
//! BP_DELAY_PEAK_DET  ▁▂▄▅▃▂▁▁   slow ramp through 60% of the horizon, then decay
//! BP_IMM_INCREASE    ▁▂▃▄▅▆▆▆   linear growth until 75%, then plateau
//! BP_BEGINNERS_DET   █▄▂▁▁▁▁▁   front-loaded, halving each period
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distribution::{round_index, Distribution};
use crate::error::NpvError;

use super::ProfileAxis;

/// Registered benefit shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BenefitProfile {
    /// Equal weight in every period.
    #[default]
    #[serde(rename = "BP_UNIFORM")]
    Uniform,

    /// Zero for the first `round(n * 0.25)` periods, equal thereafter.
    #[serde(rename = "BP_DELAY_UNIFORM")]
    DelayUniform,

    /// `0.30` for the first `ceil(n / 2)` periods, `0.70` for the rest.
    #[serde(rename = "BP_DELAY_PLATEAU")]
    DelayPlateau,

    /// Low initial block, linear ramp of `0.1` per period up to the peak
    /// index `round(n * 0.6) - 1` (which itself weighs `0.25`), then decay at
    /// `0.7` per period floored at `0.01`.
    #[serde(rename = "BP_DELAY_PEAK_DET")]
    DelayPeakDet,

    /// Weight equal to the period number until `round(n * 0.75)`, flat after.
    #[serde(rename = "BP_IMM_INCREASE")]
    ImmIncrease,

    /// `0.40` in the first period, halving each period, floored at `0.01`.
    #[serde(rename = "BP_BEGINNERS_DET")]
    BeginnersDet,
}

impl BenefitProfile {
    /// All benefit profiles in registration order. The first is the default.
    pub const ALL: [BenefitProfile; 6] = [
        BenefitProfile::Uniform,
        BenefitProfile::DelayUniform,
        BenefitProfile::DelayPlateau,
        BenefitProfile::DelayPeakDet,
        BenefitProfile::ImmIncrease,
        BenefitProfile::BeginnersDet,
    ];

    /// All benefit profiles in registration order.
    #[inline]
    pub fn all() -> &'static [BenefitProfile] {
        &Self::ALL
    }

    /// Stable registry key.
    ///
    /// ```
    /// use goal_ledger_npv::profile::BenefitProfile;
    ///
    /// assert_eq!(BenefitProfile::Uniform.key(), "BP_UNIFORM");
    /// assert_eq!(BenefitProfile::DelayPeakDet.key(), "BP_DELAY_PEAK_DET");
    /// ```
    #[inline]
    pub fn key(&self) -> &'static str {
        match self {
            BenefitProfile::Uniform => "BP_UNIFORM",
            BenefitProfile::DelayUniform => "BP_DELAY_UNIFORM",
            BenefitProfile::DelayPlateau => "BP_DELAY_PLATEAU",
            BenefitProfile::DelayPeakDet => "BP_DELAY_PEAK_DET",
            BenefitProfile::ImmIncrease => "BP_IMM_INCREASE",
            BenefitProfile::BeginnersDet => "BP_BEGINNERS_DET",
        }
    }

    /// Short name for profile pickers.
    pub fn label(&self) -> &'static str {
        match self {
            BenefitProfile::Uniform => "Uniform",
            BenefitProfile::DelayUniform => "Delayed uniform",
            BenefitProfile::DelayPlateau => "Delayed plateau",
            BenefitProfile::DelayPeakDet => "Delayed peak, then decline",
            BenefitProfile::ImmIncrease => "Immediate increase",
            BenefitProfile::BeginnersDet => "Early peak, then decline",
        }
    }

    /// One-line explanation of the shape.
    pub fn description(&self) -> &'static str {
        match self {
            BenefitProfile::Uniform => "Benefit is realised evenly across all periods.",
            BenefitProfile::DelayUniform => {
                "No benefit during the first quarter of the horizon, then evenly realised."
            }
            BenefitProfile::DelayPlateau => {
                "A modest benefit in the first half, rising to a higher plateau in the second."
            }
            BenefitProfile::DelayPeakDet => {
                "Slow start, ramping up through about 60% of the horizon before deteriorating."
            }
            BenefitProfile::ImmIncrease => {
                "Benefit starts immediately and grows linearly until it levels off at 75% of the horizon."
            }
            BenefitProfile::BeginnersDet => {
                "Most benefit arrives in the first period and halves every period after."
            }
        }
    }

    /// Look up a profile by its registry key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Look up a profile by key, substituting the default for unknown keys.
    ///
    /// ```
    /// use goal_ledger_npv::profile::BenefitProfile;
    ///
    /// assert_eq!(BenefitProfile::from_key_or_default("BP_IMM_INCREASE"), BenefitProfile::ImmIncrease);
    /// assert_eq!(BenefitProfile::from_key_or_default("DOES_NOT_EXIST"), BenefitProfile::Uniform);
    /// ```
    pub fn from_key_or_default(key: &str) -> Self {
        match Self::from_key(key) {
            Some(profile) => profile,
            None => {
                let fallback = Self::default();
                tracing::warn!(
                    key,
                    fallback = fallback.key(),
                    "unknown benefit profile key, using default"
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
            BenefitProfile::Uniform => uniform,
            BenefitProfile::DelayUniform => delay_uniform,
            BenefitProfile::DelayPlateau => delay_plateau,
            BenefitProfile::DelayPeakDet => delay_peak_det,
            BenefitProfile::ImmIncrease => imm_increase,
            BenefitProfile::BeginnersDet => beginners_det,
        }
    }
}

impl fmt::Display for BenefitProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BenefitProfile {
    type Err = NpvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| NpvError::unknown_profile(ProfileAxis::Benefit, s))
    }
}

fn uniform(n: usize) -> Vec<f64> {
    vec![1.0; n]
}

fn delay_uniform(n: usize) -> Vec<f64> {
    let delay = round_index(n as f64 * 0.25);
    (0..n).map(|i| if i < delay { 0.0 } else { 1.0 }).collect()
}

fn delay_plateau(n: usize) -> Vec<f64> {
    let first_half = n.div_ceil(2);
    (0..n)
        .map(|i| if i < first_half { 0.30 } else { 0.70 })
        .collect()
}

const PEAK_INITIAL_WEIGHT: f64 = 0.05;
const PEAK_RAMP_STEP: f64 = 0.1;
const PEAK_WEIGHT: f64 = 0.25;
const PEAK_DECAY: f64 = 0.7;
const DECAY_FLOOR: f64 = 0.01;

fn delay_peak_det(n: usize) -> Vec<f64> {
    let block = round_index(n as f64 * 0.2).max(1);
    let peak = round_index(n as f64 * 0.6).saturating_sub(1);

    (0..n)
        .map(|i| {
            if i == peak {
                PEAK_WEIGHT
            } else if i < block {
                PEAK_INITIAL_WEIGHT
            } else if i < peak {
                PEAK_INITIAL_WEIGHT + PEAK_RAMP_STEP * (i - block + 1) as f64
            } else {
                (PEAK_WEIGHT * PEAK_DECAY.powi((i - peak) as i32)).max(DECAY_FLOOR)
            }
        })
        .collect()
}

fn imm_increase(n: usize) -> Vec<f64> {
    let plateau_start = round_index(n as f64 * 0.75).max(1);
    (1..=n)
        .map(|period| period.min(plateau_start) as f64)
        .collect()
}

fn beginners_det(n: usize) -> Vec<f64> {
    const START: f64 = 0.40;
    const DECAY: f64 = 0.5;
    (0..n)
        .map(|i| {
            if i == 0 {
                START
            } else {
                (START * DECAY.powi(i as i32)).max(DECAY_FLOOR)
            }
        })
        .collect()
}
