//! Integration tests for the periodization and NPV pipeline.
//!
//! These tests drive the public API end to end with deterministic data
//! (NO MOCKS):
//! - Reference scenarios with hand-checked period values
//! - Every registered profile across the supported horizon
//! - Fallback behaviour for unknown or missing selections
//! - Boundary checks for period counts, totals and configuration

mod helpers;
mod edge_case_tests;
mod profile_tests;
mod scenario_tests;
