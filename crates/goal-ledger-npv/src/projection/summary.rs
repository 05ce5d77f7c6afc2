//! Projection output and headline figures.

use serde::{Deserialize, Serialize};

use crate::distribution::round_to;
use crate::periodizer::PeriodizedEntity;

use super::PeriodResult;

/// Headline figures over the whole horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    /// Sum of gross benefit over all periods.
    pub total_gross_benefit: f64,
    /// Sum of gross cost over all periods.
    pub total_gross_cost: f64,
    /// Sum of net points over all periods (undiscounted).
    pub total_net_points: f64,
    /// Accumulated NPV at the last period, `0.0` for an empty series.
    #[serde(rename = "finalAccumulatedNPV")]
    pub final_accumulated_npv: f64,
    /// First period from which the accumulated NPV stays non-negative to the
    /// end of the horizon. `None` if it ends negative or the series is empty.
    pub break_even_period: Option<u32>,
}

impl ProjectionSummary {
    /// Summarise a period series, rounding totals to `decimals`.
    pub fn from_periods(periods: &[PeriodResult], decimals: u32) -> Self {
        let total = |f: fn(&PeriodResult) -> f64| round_to(periods.iter().map(f).sum(), decimals);

        Self {
            total_gross_benefit: total(|p| p.gross_benefit),
            total_gross_cost: total(|p| p.gross_cost),
            total_net_points: total(|p| p.net_points),
            final_accumulated_npv: periods.last().map_or(0.0, |p| p.accumulated_npv),
            break_even_period: break_even_period(periods),
        }
    }

    /// Whether the horizon ends with a non-negative accumulated NPV.
    #[inline]
    pub fn is_profitable(&self) -> bool {
        self.break_even_period.is_some()
    }
}

fn break_even_period(periods: &[PeriodResult]) -> Option<u32> {
    let first = periods.first()?;
    match periods.iter().rposition(|p| p.accumulated_npv < 0.0) {
        None => Some(first.period),
        Some(last_negative) => periods.get(last_negative + 1).map(|p| p.period),
    }
}

/// Full result of one projection: per-entity breakdown plus the aggregated
/// period series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Number of periods projected.
    pub period_count: usize,
    /// Discount rate applied.
    pub discount_rate: f64,
    /// Each entity's periodized arrays.
    pub entities: Vec<PeriodizedEntity>,
    /// Aggregated per-period values, empty when there is nothing to project.
    pub periods: Vec<PeriodResult>,
    /// Headline figures.
    pub summary: ProjectionSummary,
}

impl Projection {
    /// Whether the aggregated series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Result for a 1-based period.
    pub fn period(&self, period: u32) -> Option<&PeriodResult> {
        self.periods.iter().find(|p| p.period == period)
    }

    /// Breakdown for one entity.
    pub fn entity(&self, id: &str) -> Option<&PeriodizedEntity> {
        self.entities.iter().find(|e| e.entity_id == id)
    }
}
