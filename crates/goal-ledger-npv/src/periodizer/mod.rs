//! Entity periodizer: spreads one work item's totals over the horizon.
//!
//! `periodized_benefit[i] = benefit_distribution[i] * total_benefit` and the
//! same for cost, rounded to the configured periodized precision (2 decimals
//! by default).

mod entity;


pub use self::entity::{Entity, ProfileSelection, ProfileSelections};

use serde::{Deserialize, Serialize};

use crate::config::RoundingConfig;
use crate::distribution::{round_to, Distribution};
use crate::profile::{BenefitProfile, CostProfile};

/// One entity's totals spread across the periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodizedEntity {
    /// Identifier of the source entity.
    pub entity_id: String,
    /// Benefit profile actually applied (after fallback).
    pub benefit_profile: BenefitProfile,
    /// Cost profile actually applied (after fallback).
    pub cost_profile: CostProfile,
    /// Benefit per period, index 0 = period 1.
    pub periodized_benefit: Vec<f64>,
    /// Cost per period, index 0 = period 1.
    pub periodized_cost: Vec<f64>,
}

impl PeriodizedEntity {
    /// Number of periods covered.
    #[inline]
    pub fn period_count(&self) -> usize {
        self.periodized_benefit.len()
    }

    /// Benefit for a 0-based period index, `0.0` when absent.
    #[inline]
    pub fn benefit_at(&self, index: usize) -> f64 {
        self.periodized_benefit.get(index).copied().unwrap_or(0.0)
    }

    /// Cost for a 0-based period index, `0.0` when absent.
    #[inline]
    pub fn cost_at(&self, index: usize) -> f64 {
        self.periodized_cost.get(index).copied().unwrap_or(0.0)
    }

    /// Sum of the periodized benefit.
    pub fn total_periodized_benefit(&self) -> f64 {
        self.periodized_benefit.iter().sum()
    }

    /// Sum of the periodized cost.
    pub fn total_periodized_cost(&self) -> f64 {
        self.periodized_cost.iter().sum()
    }
}

/// Periodize `entity` over `periods` periods with default rounding.
///
/// A missing selection uses the registry defaults; unknown keys fall back per
/// axis.
///
/// ```
/// use goal_ledger_npv::periodizer::{periodize, Entity, ProfileSelection};
/// use goal_ledger_npv::profile::{BenefitProfile, CostProfile};
///
/// let entity = Entity::new("GOAL-1", 1000.0, 500.0);
/// let selection = ProfileSelection::new(BenefitProfile::Uniform, CostProfile::Uniform);
/// let spread = periodize(&entity, Some(&selection), 4);
/// assert_eq!(spread.periodized_benefit, vec![250.0; 4]);
/// assert_eq!(spread.periodized_cost, vec![125.0; 4]);
/// ```
pub fn periodize(
    entity: &Entity,
    selection: Option<&ProfileSelection>,
    periods: usize,
) -> PeriodizedEntity {
    periodize_with(entity, selection, periods, &RoundingConfig::default())
}

/// Periodize `entity` with explicit rounding settings.
pub fn periodize_with(
    entity: &Entity,
    selection: Option<&ProfileSelection>,
    periods: usize,
    rounding: &RoundingConfig,
) -> PeriodizedEntity {
    let (benefit_profile, cost_profile) = selection
        .map(ProfileSelection::resolve)
        .unwrap_or_default();

    let benefit = spread(
        benefit_profile.raw_weights(periods),
        entity.total_benefit,
        rounding,
    );
    let cost = spread(cost_profile.raw_weights(periods), entity.total_cost, rounding);

    PeriodizedEntity {
        entity_id: entity.id.clone(),
        benefit_profile,
        cost_profile,
        periodized_benefit: benefit,
        periodized_cost: cost,
    }
}

fn spread(raw: Vec<f64>, total: f64, rounding: &RoundingConfig) -> Vec<f64> {
    let distribution = Distribution::normalize_with_precision(raw, rounding.distribution_decimals);
    let scaled = distribution.scale(total);
    match rounding.periodized_decimals {
        Some(decimals) => scaled.into_iter().map(|v| round_to(v, decimals)).collect(),
        None => scaled,
    }
}
