//! Aggregation and discounting of periodized entities.
//!
//! For each period `p` in `1..=n`:
//!
//! ```text
//! gross_benefit(p)   = round2( Σ periodized_benefit[p-1] )
//! gross_cost(p)      = round2( Σ periodized_cost[p-1] )
//! net_points(p)      = round2( gross_benefit(p) - gross_cost(p) )
//! df(p)              = 1 / (1 + rate)^p               reported as round4(df)
//! net_present_value  = round2( net_points(p) * df(p) )
//! accumulated_npv(p) = round2( accumulated_npv(p-1) + net_present_value(p) )
//! ```
//!
//! Accumulation runs over the already-rounded per-period NPVs, so rounding
//! compounds across periods. Outputs depend on this; keep it.

mod calculator;
mod summary;


pub use self::calculator::NpvCalculator;
pub use self::summary::{Projection, ProjectionSummary};

use serde::{Deserialize, Serialize};

use crate::config::{RoundingConfig, DEFAULT_DISCOUNT_RATE};
use crate::distribution::round_to;
use crate::periodizer::{periodize_with, Entity, PeriodizedEntity, ProfileSelections};

/// Aggregated financial values for one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodResult {
    /// 1-based period index.
    pub period: u32,
    /// Sum of periodized benefit across all entities.
    pub gross_benefit: f64,
    /// Sum of periodized cost across all entities.
    pub gross_cost: f64,
    /// `gross_benefit - gross_cost`.
    pub net_points: f64,
    /// `1 / (1 + rate)^period`.
    pub discount_factor: f64,
    /// `net_points * discount_factor`.
    pub net_present_value: f64,
    /// Running sum of `net_present_value` up to and including this period.
    #[serde(rename = "accumulatedNPV")]
    pub accumulated_npv: f64,
}

/// Present-value multiplier for `period` at `rate`: `1 / (1 + rate)^period`.
///
/// ```
/// use goal_ledger_npv::projection::discount_factor;
/// use goal_ledger_npv::distribution::round_to;
///
/// assert_eq!(round_to(discount_factor(0.10, 1), 4), 0.9091);
/// assert_eq!(round_to(discount_factor(0.10, 10), 4), 0.3855);
/// ```
#[inline]
pub fn discount_factor(rate: f64, period: u32) -> f64 {
    1.0 / (1.0 + rate).powi(period as i32)
}

/// Aggregate `entities` over `periods` periods at the default 10% rate.
///
/// Returns an empty series when there are no entities or no periods.
pub fn aggregate(
    entities: &[Entity],
    selections: &ProfileSelections,
    periods: usize,
) -> Vec<PeriodResult> {
    aggregate_with_rate(entities, selections, periods, DEFAULT_DISCOUNT_RATE)
}

/// Aggregate `entities` over `periods` periods at `rate`.
pub fn aggregate_with_rate(
    entities: &[Entity],
    selections: &ProfileSelections,
    periods: usize,
    rate: f64,
) -> Vec<PeriodResult> {
    if entities.is_empty() || periods == 0 {
        return Vec::new();
    }
    let rounding = RoundingConfig::default();
    let periodized = periodize_all(entities, selections, periods, &rounding);
    aggregate_periodized(&periodized, periods, rate, &rounding)
}

pub(crate) fn periodize_all(
    entities: &[Entity],
    selections: &ProfileSelections,
    periods: usize,
    rounding: &RoundingConfig,
) -> Vec<PeriodizedEntity> {
    entities
        .iter()
        .map(|entity| periodize_with(entity, selections.get(&entity.id), periods, rounding))
        .collect()
}

/// Sum periodized entities per period and discount the net values.
///
/// Entities shorter than `periods` contribute zero for the missing periods.
pub fn aggregate_periodized(
    periodized: &[PeriodizedEntity],
    periods: usize,
    rate: f64,
    rounding: &RoundingConfig,
) -> Vec<PeriodResult> {
    if periodized.is_empty() || periods == 0 {
        return Vec::new();
    }

    let value = |v: f64| round_to(v, rounding.value_decimals);
    let mut results = Vec::with_capacity(periods);
    let mut accumulated_npv = 0.0;

    for index in 0..periods {
        let period = (index + 1) as u32;

        let gross_benefit = value(periodized.iter().map(|e| e.benefit_at(index)).sum());
        let gross_cost = value(periodized.iter().map(|e| e.cost_at(index)).sum());
        let net_points = value(gross_benefit - gross_cost);

        let factor = discount_factor(rate, period);
        let net_present_value = value(net_points * factor);
        accumulated_npv = value(accumulated_npv + net_present_value);

        results.push(PeriodResult {
            period,
            gross_benefit,
            gross_cost,
            net_points,
            discount_factor: round_to(factor, rounding.factor_decimals),
            net_present_value,
            accumulated_npv,
        });
    }

    results
}
