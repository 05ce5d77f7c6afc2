//! Profiles command
//!
//! Lists the profile registries with each shape's normalized distribution
//! over a chosen horizon.

use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::{error, info};

use goal_ledger_npv::profile::{self, catalog, ProfileAxis, ProfileInfo};
use goal_ledger_npv::{Distribution, EngineConfig};

use super::{exit_code_for, print_json, EXIT_OK};

/// Which registry to list.
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum AxisFilter {
    /// Benefit profiles (BP_*)
    Benefit,
    /// Cost profiles (SP_*)
    Cost,
    /// Both registries
    #[default]
    All,
}

impl AxisFilter {
    fn axes(&self) -> &'static [ProfileAxis] {
        match self {
            AxisFilter::Benefit => &[ProfileAxis::Benefit],
            AxisFilter::Cost => &[ProfileAxis::Cost],
            AxisFilter::All => &[ProfileAxis::Benefit, ProfileAxis::Cost],
        }
    }
}

/// Arguments for the profiles command.
#[derive(Args, Debug)]
pub struct ProfilesArgs {
    /// Number of periods to generate each distribution over
    #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
    pub periods: i64,

    /// Registry to list (benefit, cost, all)
    #[arg(short, long, default_value = "all")]
    pub axis: AxisFilter,

    /// Output as JSON instead of human-readable
    #[arg(long)]
    pub json: bool,
}

/// One catalog entry with its generated shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileListing {
    #[serde(flatten)]
    info: ProfileInfo,
    distribution: Distribution,
}

/// Execute the profiles command.
///
/// Returns 0 on success, 1 for an invalid period count.
pub fn handle_profiles(args: ProfilesArgs) -> i32 {
    let periods = match EngineConfig::default().check_period_count(args.periods) {
        Ok(n) => n,
        Err(e) => {
            error!("Profiles rejected: {}", e);
            eprintln!("Error: {e}");
            return exit_code_for(&e);
        }
    };

    let listings: Vec<ProfileListing> = args
        .axis
        .axes()
        .iter()
        .flat_map(|axis| catalog(*axis))
        .map(|info| ProfileListing {
            distribution: profile::generate(info.axis, info.key, periods),
            info,
        })
        .collect();
    info!(count = listings.len(), periods, "Profiles generated");

    if args.json {
        return print_json(&listings);
    }

    for listing in &listings {
        let info = &listing.info;
        let marker = if info.is_default { " (default)" } else { "" };
        println!("{} [{}]{}", info.key, info.axis, marker);
        println!("  {}: {}", info.label, info.description);
        let values: Vec<String> = listing.distribution.iter().map(|f| format!("{f:.4}")).collect();
        println!("  [{}]", values.join(", "));
        println!();
    }
    EXIT_OK
}
