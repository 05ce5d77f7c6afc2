//! Engine input types: entities and their profile selections.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{NpvError, NpvResult};
use crate::profile::{BenefitProfile, CostProfile};

/// A work item as seen by the engine: an opaque id and two totals.
///
/// Absent or `null` totals deserialize as `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Opaque identifier, used only for selection lookups.
    pub id: String,

    /// Total benefit points to spread over the horizon.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_benefit: f64,

    /// Total cost (size) points to spread over the horizon.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_cost: f64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl Entity {
    /// Create an entity.
    pub fn new(id: impl Into<String>, total_benefit: f64, total_cost: f64) -> Self {
        Self {
            id: id.into(),
            total_benefit,
            total_cost,
        }
    }

    /// Check that both totals are finite and non-negative.
    ///
    /// The engine does not call this; it is the boundary check for callers
    /// that accept totals from outside.
    pub fn validate(&self) -> NpvResult<()> {
        for (field, value) in [
            ("totalBenefit", self.total_benefit),
            ("totalCost", self.total_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(NpvError::invalid_total(&self.id, field, value));
            }
        }
        Ok(())
    }
}

/// The benefit and cost profile keys chosen for one entity.
///
/// Keys are kept as strings because they arrive from a selection store;
/// [`resolve`](Self::resolve) maps them onto the registries, substituting
/// defaults for unknown keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSelection {
    /// Key into the benefit registry (`BP_*`).
    pub benefit_profile_key: String,
    /// Key into the cost registry (`SP_*`).
    pub cost_profile_key: String,
}

impl Default for ProfileSelection {
    fn default() -> Self {
        Self::new(BenefitProfile::default(), CostProfile::default())
    }
}

impl ProfileSelection {
    /// Selection of two registered profiles.
    pub fn new(benefit: BenefitProfile, cost: CostProfile) -> Self {
        Self {
            benefit_profile_key: benefit.key().to_string(),
            cost_profile_key: cost.key().to_string(),
        }
    }

    /// Selection from raw keys, which may be unknown.
    pub fn from_keys(benefit_key: impl Into<String>, cost_key: impl Into<String>) -> Self {
        Self {
            benefit_profile_key: benefit_key.into(),
            cost_profile_key: cost_key.into(),
        }
    }

    /// Resolve both keys, falling back to each registry's default.
    pub fn resolve(&self) -> (BenefitProfile, CostProfile) {
        (
            BenefitProfile::from_key_or_default(&self.benefit_profile_key),
            CostProfile::from_key_or_default(&self.cost_profile_key),
        )
    }
}

/// Profile selections keyed by entity id.
pub type ProfileSelections = HashMap<String, ProfileSelection>;
