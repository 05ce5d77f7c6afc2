//! Project command
//!
//! Loads a portfolio file, validates it at the boundary and runs the full
//! projection.
//!
//! # Input
//!
//! ```json
//! {
//!   "entities": [{ "id": "A", "totalBenefit": 100, "totalCost": 50 }],
//!   "selections": { "A": { "benefitProfileKey": "BP_UNIFORM", "costProfileKey": "SP_DEV1_UNIFORM" } }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;
use tracing::{error, info, warn};

use goal_ledger_npv::{EngineConfig, Entity, NpvCalculator, NpvError, ProfileSelections, Projection};

use super::{exit_code_for, print_json, EXIT_IO, EXIT_OK};

/// Arguments for the project command.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Portfolio JSON file with `entities` and optional `selections`
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of periods to project
    #[arg(short, long, allow_negative_numbers = true)]
    pub periods: i64,

    /// Annual discount rate, overrides the config file (default 0.10)
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    pub discount_rate: Option<f64>,

    /// Engine configuration JSON file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Portfolio file contents.
#[derive(Debug, Default, Deserialize)]
struct PortfolioInput {
    #[serde(default)]
    entities: Vec<Entity>,
    #[serde(default)]
    selections: ProfileSelections,
}

/// Execute the project command.
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Invalid period count, entity totals or configuration
/// - 2: Input or config file could not be read or parsed
pub fn handle_project(args: ProjectArgs) -> i32 {
    match run(&args) {
        Ok(projection) => {
            info!(
                entities = projection.entities.len(),
                periods = projection.period_count,
                "Projection complete"
            );
            if args.json {
                print_json(&projection)
            } else {
                print_projection(&projection);
                EXIT_OK
            }
        }
        Err(Failure::Io(message)) => {
            error!("{}", message);
            eprintln!("Error: {message}");
            EXIT_IO
        }
        Err(Failure::Engine(e)) => {
            error!("Projection rejected: {}", e);
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

enum Failure {
    Io(String),
    Engine(NpvError),
}

impl From<NpvError> for Failure {
    fn from(err: NpvError) -> Self {
        Failure::Engine(err)
    }
}

fn run(args: &ProjectArgs) -> Result<Projection, Failure> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_str(&read_file(path)?)?,
        None => EngineConfig::default(),
    };
    if let Some(rate) = args.discount_rate {
        config.discount.annual_rate = rate;
    }
    let calculator = NpvCalculator::try_new(config)?;
    let periods = calculator.config().check_period_count(args.periods)?;

    let input: PortfolioInput = serde_json::from_str(&read_file(&args.input)?)
        .map_err(|e| Failure::Io(format!("Failed to parse {}: {}", args.input.display(), e)))?;

    for entity in &input.entities {
        entity.validate()?;
    }
    for id in input.selections.keys() {
        if !input.entities.iter().any(|e| &e.id == id) {
            warn!(entity_id = %id, "Selection for unknown entity ignored");
        }
    }

    Ok(calculator.project(&input.entities, &input.selections, periods))
}

fn read_file(path: &Path) -> Result<String, Failure> {
    fs::read_to_string(path)
        .map_err(|e| Failure::Io(format!("Failed to read {}: {}", path.display(), e)))
}

fn print_projection(projection: &Projection) {
    println!("NPV Projection");
    println!("==============\n");
    println!(
        "Entities: {}   Periods: {}   Discount rate: {:.2}%\n",
        projection.entities.len(),
        projection.period_count,
        projection.discount_rate * 100.0
    );

    if projection.is_empty() {
        println!("Nothing to project.");
        return;
    }

    println!(
        "{:>6} {:>14} {:>14} {:>14} {:>8} {:>14} {:>16}",
        "Period", "Benefit", "Cost", "Net", "DF", "NPV", "Accumulated"
    );
    for p in &projection.periods {
        println!(
            "{:>6} {:>14.2} {:>14.2} {:>14.2} {:>8.4} {:>14.2} {:>16.2}",
            p.period,
            p.gross_benefit,
            p.gross_cost,
            p.net_points,
            p.discount_factor,
            p.net_present_value,
            p.accumulated_npv
        );
    }

    let summary = &projection.summary;
    println!();
    println!("Total benefit:   {:.2}", summary.total_gross_benefit);
    println!("Total cost:      {:.2}", summary.total_gross_cost);
    println!("Final NPV:       {:.2}", summary.final_accumulated_npv);
    match summary.break_even_period {
        Some(period) => println!("Break-even:      period {period}"),
        None => println!("Break-even:      not reached"),
    }
}
