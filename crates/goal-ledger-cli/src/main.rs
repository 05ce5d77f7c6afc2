//! Goal Ledger CLI
//!
//! Command-line front end for the periodization and NPV engine.
//!
//! # Commands
//!
//! - `project`: Spread entity totals over a horizon and discount the net values
//! - `profiles`: List the registered benefit and cost profiles with their shapes
//!
//! Input and output are JSON at the boundary; tables are for humans.
//!
//! # Exit codes
//! - 0: success
//! - 1: input or validation error (bad period count, negative totals, bad config)
//! - 2: I/O or parse failure

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Goal Ledger - benefit/cost periodization and NPV projection
#[derive(Parser)]
#[command(name = "goal-ledger")]
#[command(version)]
#[command(about = "Periodize goal benefits and costs and project their net present value")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project entities over a horizon of periods
    ///
    /// Reads `{ "entities": [...], "selections": {...} }` from a JSON file,
    /// spreads each entity's totals by its selected profiles and prints the
    /// aggregated, discounted series.
    Project(commands::project::ProjectArgs),
    /// List registered profiles and their normalized distributions
    Profiles(commands::profiles::ProfilesArgs),
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Project(args) => commands::project::handle_project(args),
        Commands::Profiles(args) => commands::profiles::handle_profiles(args),
    };

    std::process::exit(exit_code);
}
