//! Reference scenario tests with hand-checked values.

use goal_ledger_npv::{
    aggregate, discount_factor, round_to, BenefitProfile, CostProfile, EngineConfig, NpvCalculator,
    ProfileSelection, ProfileSelections,
};

use super::helpers::{assert_close, generate_portfolio, reference_portfolio, rotate_selections};

// =============================================================================
// REFERENCE SCENARIO
// =============================================================================

#[test]
fn test_reference_scenario_two_periods() {
    let periods = aggregate(&reference_portfolio(), &ProfileSelections::new(), 2);

    let expected = [
        // (benefit, cost, net, df, npv, accumulated)
        (150.0, 25.0, 125.0, 0.9091, 113.64, 113.64),
        (150.0, 25.0, 125.0, 0.8264, 103.31, 216.95),
    ];
    for (p, e) in periods.iter().zip(expected) {
        assert_eq!(
            (
                p.gross_benefit,
                p.gross_cost,
                p.net_points,
                p.discount_factor,
                p.net_present_value,
                p.accumulated_npv
            ),
            e,
            "period {}",
            p.period
        );
    }
}

#[test]
fn test_front_loaded_cost_delays_break_even() {
    let entities = reference_portfolio();
    let mut selections = ProfileSelections::new();
    selections.insert(
        "A".to_string(),
        ProfileSelection::new(BenefitProfile::DelayUniform, CostProfile::Dev1Uniform),
    );
    selections.insert(
        "B".to_string(),
        ProfileSelection::new(BenefitProfile::DelayUniform, CostProfile::Uniform),
    );

    // Benefit delayed by round(0.25 * 4) = 1 period: [0, 1/3, 1/3, 1/3].
    // A's cost is [0.625, 0.125, 0.125, 0.125] of 50.
    let projection = NpvCalculator::with_defaults().project(&entities, &selections, 4);
    let first = projection.periods[0];
    assert_eq!(first.gross_benefit, 0.0);
    assert_eq!(first.gross_cost, 31.25);
    assert_eq!(first.net_points, -31.25);
    assert!(first.accumulated_npv < 0.0);

    assert_eq!(projection.summary.break_even_period, Some(2));
    assert_eq!(projection.summary.total_gross_benefit, 300.0);
    assert_eq!(projection.summary.total_gross_cost, 50.0);
}

#[test]
fn test_periodized_totals_are_preserved() {
    let entities = generate_portfolio(24);
    let selections = rotate_selections(&entities);
    let projection = NpvCalculator::with_defaults().project(&entities, &selections, 12);

    for (source, spread) in entities.iter().zip(&projection.entities) {
        assert_eq!(source.id, spread.entity_id);
        // Each period rounds to cents, so the total drifts by at most half a
        // cent per period.
        let tolerance = 0.005 * 12.0 + 1e-9;
        assert!(
            (spread.total_periodized_benefit() - source.total_benefit).abs() <= tolerance,
            "{}: benefit {} vs {}",
            source.id,
            spread.total_periodized_benefit(),
            source.total_benefit
        );
        assert!(
            (spread.total_periodized_cost() - source.total_cost).abs() <= tolerance,
            "{}: cost drift",
            source.id
        );
    }
}

#[test]
fn test_accumulation_composes_across_periods() {
    let entities = generate_portfolio(10);
    let selections = rotate_selections(&entities);
    let periods = aggregate(&entities, &selections, 30);

    let mut accumulated = 0.0;
    for p in &periods {
        accumulated = round_to(accumulated + p.net_present_value, 2);
        assert_close(p.accumulated_npv, accumulated, "accumulated npv");
        assert_close(
            p.net_present_value,
            round_to(p.net_points * discount_factor(0.10, p.period), 2),
            "period npv",
        );
    }
}

#[test]
fn test_zero_rate_npv_equals_net_points() {
    let calculator =
        NpvCalculator::try_new(EngineConfig::with_discount_rate(0.0)).expect("valid config");
    let entities = generate_portfolio(6);
    let projection = calculator.project(&entities, &rotate_selections(&entities), 8);

    for p in &projection.periods {
        assert_eq!(p.discount_factor, 1.0);
        assert_eq!(p.net_present_value, p.net_points);
    }
    assert_close(
        projection.summary.final_accumulated_npv,
        projection.summary.total_net_points,
        "undiscounted total",
    );
}

#[test]
fn test_projection_serializes_with_camel_case_keys() {
    let projection =
        NpvCalculator::with_defaults().project(&reference_portfolio(), &ProfileSelections::new(), 2);
    let json = serde_json::to_value(&projection).expect("serialize projection");

    assert_eq!(json["periodCount"], 2);
    assert_eq!(json["periods"][1]["accumulatedNPV"], 216.95);
    assert_eq!(json["entities"][0]["entityId"], "A");
    assert_eq!(json["entities"][0]["benefitProfile"], "BP_UNIFORM");
    assert_eq!(json["entities"][0]["periodizedCost"][0], 25.0);
    assert_eq!(json["summary"]["finalAccumulatedNPV"], 216.95);
    assert_eq!(json["summary"]["breakEvenPeriod"], 1);
}
