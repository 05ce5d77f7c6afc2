//! CLI command handlers
//!
//! # Modules
//!
//! - `project`: Periodize, aggregate and discount an input portfolio
//! - `profiles`: Profile catalog with generated distributions

pub mod profiles;
pub mod project;

/// Exit code for a successful run.
pub const EXIT_OK: i32 = 0;

/// Exit code for rejected input (period count, totals, configuration).
pub const EXIT_INVALID_INPUT: i32 = 1;

/// Exit code for unreadable or unparseable files.
pub const EXIT_IO: i32 = 2;

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            EXIT_OK
        }
        Err(e) => {
            tracing::error!("Failed to serialize output: {}", e);
            eprintln!("Error: {e}");
            EXIT_IO
        }
    }
}

/// Map an engine error onto the CLI exit code.
pub(crate) fn exit_code_for(err: &goal_ledger_npv::NpvError) -> i32 {
    match err {
        goal_ledger_npv::NpvError::SerializationError(_) => EXIT_IO,
        _ => EXIT_INVALID_INPUT,
    }
}
