//! Profile library: named shapes that spread a total across periods.
//!
//! Two disjoint registries exist, one per [`ProfileAxis`]:
//!
//! - [`BenefitProfile`]: six shapes keyed `BP_*`, default `BP_UNIFORM`
//! - [`CostProfile`]: five shapes keyed `SP_*`, default `SP_UNIFORM_COST`
//!
//! Lookups by string key never fail; an unknown key resolves to the default
//! profile of its registry.
//!
//! # Example
//!
//! ```
//! use goal_ledger_npv::profile::{generate, ProfileAxis};
//!
//! let d = generate(ProfileAxis::Cost, "SP_DEV1_UNIFORM", 5);
//! assert_eq!(d.as_slice(), &[0.5556, 0.1111, 0.1111, 0.1111, 0.1111]);
//!
//! let fallback = generate(ProfileAxis::Benefit, "DOES_NOT_EXIST", 4);
//! assert_eq!(fallback.as_slice(), &[0.25, 0.25, 0.25, 0.25]);
//! ```

mod benefit;
mod cost;


pub use self::benefit::BenefitProfile;
pub use self::cost::CostProfile;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;

/// Which registry a profile key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileAxis {
    /// Benefit point profiles (`BP_*`).
    Benefit,
    /// Size/cost point profiles (`SP_*`).
    Cost,
}

impl ProfileAxis {
    /// Lowercase axis name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileAxis::Benefit => "benefit",
            ProfileAxis::Cost => "cost",
        }
    }

    /// Key of the registry's default profile.
    #[inline]
    pub fn default_key(&self) -> &'static str {
        match self {
            ProfileAxis::Benefit => BenefitProfile::default().key(),
            ProfileAxis::Cost => CostProfile::default().key(),
        }
    }
}

impl fmt::Display for ProfileAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate the distribution for `key` on `axis` over `periods` periods,
/// falling back to the axis default for unknown keys.
pub fn generate(axis: ProfileAxis, key: &str, periods: usize) -> Distribution {
    match axis {
        ProfileAxis::Benefit => generate_benefit(key, periods),
        ProfileAxis::Cost => generate_cost(key, periods),
    }
}

/// Benefit distribution for `key`, default profile if unknown.
pub fn generate_benefit(key: &str, periods: usize) -> Distribution {
    BenefitProfile::from_key_or_default(key).generate(periods)
}

/// Cost distribution for `key`, default profile if unknown.
pub fn generate_cost(key: &str, periods: usize) -> Distribution {
    CostProfile::from_key_or_default(key).generate(periods)
}

/// Catalog entry describing one registered profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    /// Registry the profile belongs to.
    pub axis: ProfileAxis,
    /// Stable key.
    pub key: &'static str,
    /// Short display name.
    pub label: &'static str,
    /// One-line explanation.
    pub description: &'static str,
    /// Whether this is the registry default.
    pub is_default: bool,
}

/// All registered profiles of `axis`, in registration order.
pub fn catalog(axis: ProfileAxis) -> Vec<ProfileInfo> {
    match axis {
        ProfileAxis::Benefit => BenefitProfile::all()
            .iter()
            .map(|p| ProfileInfo {
                axis,
                key: p.key(),
                label: p.label(),
                description: p.description(),
                is_default: *p == BenefitProfile::default(),
            })
            .collect(),
        ProfileAxis::Cost => CostProfile::all()
            .iter()
            .map(|p| ProfileInfo {
                axis,
                key: p.key(),
                label: p.label(),
                description: p.description(),
                is_default: *p == CostProfile::default(),
            })
            .collect(),
    }
}
