//! NpvCalculator - configured entry point for the projection pipeline.

use tracing::{debug, instrument, trace};

use crate::config::EngineConfig;
use crate::error::{NpvError, NpvResult};
use crate::periodizer::{periodize_with, Entity, PeriodizedEntity, ProfileSelections};

use super::{aggregate_periodized, periodize_all, PeriodResult, Projection, ProjectionSummary};

/// Runs periodization, aggregation and discounting under one validated
/// [`EngineConfig`].
///
/// The calculator holds no state besides its configuration; every method
/// takes `&self` and is a pure function of its arguments, so one instance can
/// be shared across threads.
///
/// # Example
/// ```
/// use goal_ledger_npv::periodizer::{Entity, ProfileSelections};
/// use goal_ledger_npv::projection::NpvCalculator;
///
/// let calculator = NpvCalculator::with_defaults();
/// let entities = vec![
///     Entity::new("A", 100.0, 50.0),
///     Entity::new("B", 200.0, 0.0),
/// ];
/// let projection = calculator.project(&entities, &ProfileSelections::new(), 2);
///
/// assert_eq!(projection.periods[0].net_points, 125.0);
/// assert_eq!(projection.periods[1].accumulated_npv, 216.95);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NpvCalculator {
    config: EngineConfig,
}

impl NpvCalculator {
    /// Create a calculator, returning an error if `config` is invalid.
    pub fn try_new(config: EngineConfig) -> NpvResult<Self> {
        config.validate().map_err(NpvError::ConfigError)?;
        Ok(Self { config })
    }

    /// Calculator with the default configuration (10% rate, reference rounding).
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Annual discount rate in use.
    #[inline]
    pub fn discount_rate(&self) -> f64 {
        self.config.discount.annual_rate
    }

    /// Periodize a single entity under this calculator's rounding settings.
    pub fn periodize(
        &self,
        entity: &Entity,
        selections: &ProfileSelections,
        periods: usize,
    ) -> PeriodizedEntity {
        periodize_with(
            entity,
            selections.get(&entity.id),
            periods,
            &self.config.rounding,
        )
    }

    /// Aggregated per-period series. Empty for no entities or zero periods.
    #[instrument(skip(self, entities, selections), fields(entities = entities.len()), level = "debug")]
    pub fn aggregate(
        &self,
        entities: &[Entity],
        selections: &ProfileSelections,
        periods: usize,
    ) -> Vec<PeriodResult> {
        if entities.is_empty() || periods == 0 {
            debug!("nothing to aggregate");
            return Vec::new();
        }
        let periodized = periodize_all(entities, selections, periods, &self.config.rounding);
        self.aggregate_periodized(&periodized, periods)
    }

    /// Per-entity breakdown, aggregated series and summary in one pass.
    #[instrument(skip(self, entities, selections), fields(entities = entities.len()), level = "debug")]
    pub fn project(
        &self,
        entities: &[Entity],
        selections: &ProfileSelections,
        periods: usize,
    ) -> Projection {
        let periodized = periodize_all(entities, selections, periods, &self.config.rounding);
        let series = self.aggregate_periodized(&periodized, periods);
        let summary = ProjectionSummary::from_periods(&series, self.config.rounding.value_decimals);

        debug!(
            final_npv = summary.final_accumulated_npv,
            break_even = ?summary.break_even_period,
            "projection complete"
        );

        Projection {
            period_count: periods,
            discount_rate: self.discount_rate(),
            entities: periodized,
            periods: series,
            summary,
        }
    }

    fn aggregate_periodized(
        &self,
        periodized: &[PeriodizedEntity],
        periods: usize,
    ) -> Vec<PeriodResult> {
        let series = aggregate_periodized(
            periodized,
            periods,
            self.discount_rate(),
            &self.config.rounding,
        );
        if self.config.debug {
            for p in &series {
                trace!(
                    period = p.period,
                    gross_benefit = p.gross_benefit,
                    gross_cost = p.gross_cost,
                    npv = p.net_present_value,
                    accumulated = p.accumulated_npv,
                    "period aggregated"
                );
            }
        }
        series
    }
}
