//! Periodization and NPV engine for Goal Ledger.
//!
//! This crate spreads each work item's total benefit and total cost across a
//! horizon of periods using named temporal profiles, then sums the spread
//! values per period and discounts the net result to a present value.
//!
//! # Modules
//!
//! - [`profile`]: the six benefit and five cost profile shapes
//! - [`distribution`]: normalization of raw weights to 4-decimal fractions
//! - [`periodizer`]: scaling one entity's totals by its profiles
//! - [`projection`]: per-period aggregation, discounting and accumulation
//! - [`config`]: discount rate, rounding precision and period bounds
//! - [`error`]: error types and result aliases
//!
//! # Pipeline
//!
//! ```text
//! profile key ──▶ raw weights ──▶ Distribution ──▶ × total ──▶ PeriodizedEntity
//!                                                                    │
//!                     PeriodResult ◀── discount ◀── Σ per period ◀───┘
//! ```
//!
//! # Example
//!
//! ```
//! use goal_ledger_npv::{aggregate, Entity, ProfileSelections};
//!
//! let entities = vec![
//!     Entity::new("A", 100.0, 50.0),
//!     Entity::new("B", 200.0, 0.0),
//! ];
//! let periods = aggregate(&entities, &ProfileSelections::new(), 2);
//!
//! assert_eq!(periods[0].gross_benefit, 150.0);
//! assert_eq!(periods[0].net_present_value, 113.64);
//! assert_eq!(periods[1].accumulated_npv, 216.95);
//! ```

pub mod config;
pub mod distribution;
pub mod error;
pub mod periodizer;
pub mod profile;
pub mod projection;

pub use config::EngineConfig;
pub use error::{NpvError, NpvResult};

pub use distribution::{round_to, Distribution};

pub use profile::{BenefitProfile, CostProfile, ProfileAxis};

pub use periodizer::{periodize, Entity, PeriodizedEntity, ProfileSelection, ProfileSelections};

pub use projection::{
    aggregate, discount_factor, NpvCalculator, PeriodResult, Projection, ProjectionSummary,
};
