//! Edge Case Tests
//!
//! Boundary conditions, fallbacks and special input cases.

use goal_ledger_npv::error::NpvError;
use goal_ledger_npv::periodizer::periodize;
use goal_ledger_npv::{
    aggregate, BenefitProfile, CostProfile, EngineConfig, Entity, NpvCalculator,
    ProfileSelection, ProfileSelections,
};

use super::helpers::reference_portfolio;

// =============================================================================
// EMPTY INPUTS
// =============================================================================

#[test]
fn test_no_entities_yields_empty_series() {
    assert!(aggregate(&[], &ProfileSelections::new(), 12).is_empty());

    let projection = NpvCalculator::with_defaults().project(&[], &ProfileSelections::new(), 12);
    assert!(projection.is_empty());
    assert_eq!(projection.summary.final_accumulated_npv, 0.0);
}

#[test]
fn test_zero_periods_yields_empty_series() {
    assert!(aggregate(&reference_portfolio(), &ProfileSelections::new(), 0).is_empty());

    let spread = periodize(&Entity::new("X", 10.0, 10.0), None, 0);
    assert!(spread.periodized_benefit.is_empty());
    assert!(spread.periodized_cost.is_empty());
}

#[test]
fn test_single_period_takes_whole_total() {
    for benefit in BenefitProfile::all() {
        for cost in CostProfile::all() {
            let selection = ProfileSelection::new(*benefit, *cost);
            let spread = periodize(&Entity::new("ONE", 123.45, 67.89), Some(&selection), 1);
            assert_eq!(spread.periodized_benefit, vec![123.45], "{benefit} / {cost}");
            assert_eq!(spread.periodized_cost, vec![67.89], "{benefit} / {cost}");
        }
    }
}

// =============================================================================
// FALLBACKS
// =============================================================================

#[test]
fn test_entity_without_selection_uses_uniform() {
    let mut selections = ProfileSelections::new();
    selections.insert(
        "A".to_string(),
        ProfileSelection::new(BenefitProfile::Uniform, CostProfile::Uniform),
    );
    // "B" has no entry at all.
    let explicit = aggregate(&reference_portfolio(), &selections, 6);
    let implicit = aggregate(&reference_portfolio(), &ProfileSelections::new(), 6);
    assert_eq!(explicit, implicit);
}

#[test]
fn test_unknown_keys_resolve_per_axis() {
    let entity = Entity::new("MIX", 100.0, 100.0);
    let selection = ProfileSelection::from_keys("BP_IMM_INCREASE", "SP_NOT_A_PROFILE");
    let spread = periodize(&entity, Some(&selection), 4);

    assert_eq!(spread.benefit_profile, BenefitProfile::ImmIncrease);
    assert_eq!(spread.cost_profile, CostProfile::Uniform);
    assert_eq!(spread.periodized_cost, vec![25.0; 4]);
}

#[test]
fn test_cross_axis_key_is_unknown() {
    // A cost key on the benefit axis is not a benefit profile.
    let selection = ProfileSelection::from_keys("SP_DEV1_UNIFORM", "BP_DELAY_PLATEAU");
    assert_eq!(
        selection.resolve(),
        (BenefitProfile::Uniform, CostProfile::Uniform)
    );
    assert!("SP_DEV1_UNIFORM".parse::<BenefitProfile>().is_err());
}

#[test]
fn test_zero_totals_contribute_nothing() {
    let entities = vec![Entity::new("Z", 0.0, 0.0)];
    let periods = aggregate(&entities, &ProfileSelections::new(), 5);
    assert_eq!(periods.len(), 5);
    assert!(periods
        .iter()
        .all(|p| p.gross_benefit == 0.0 && p.gross_cost == 0.0 && p.accumulated_npv == 0.0));
}

// =============================================================================
// BOUNDARY VALIDATION
// =============================================================================

#[test]
fn test_period_count_boundary() {
    let config = EngineConfig::default();
    assert_eq!(config.check_period_count(1).expect("min"), 1);
    assert_eq!(config.check_period_count(44).expect("max"), 44);
    assert_eq!(config.check_period_count(0).expect("zero"), 0);

    for bad in [-1, -100, 45, i64::MAX] {
        let err = config.check_period_count(bad).unwrap_err();
        assert!(
            matches!(err, NpvError::InvalidPeriodCount { value, .. } if value == bad),
            "{bad}: {err}"
        );
        assert!(err.is_input_error());
    }
}

#[test]
fn test_invalid_totals_are_rejected_at_boundary() {
    for (benefit, cost) in [(-1.0, 0.0), (0.0, -0.01), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
        let err = Entity::new("BAD", benefit, cost).validate().unwrap_err();
        assert!(matches!(err, NpvError::InvalidTotal { .. }), "{err}");
        assert!(err.is_recoverable());
    }
}

#[test]
fn test_config_from_json_rejects_bad_rate() {
    let err = EngineConfig::from_json_str(r#"{ "discount": { "annual_rate": -2.0 } }"#).unwrap_err();
    assert!(matches!(err, NpvError::ConfigError(_)), "{err}");

    let err = EngineConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, NpvError::SerializationError(_)), "{err}");

    let config = EngineConfig::from_json_str(r#"{ "discount": { "annual_rate": 0.05 } }"#)
        .expect("partial config");
    assert_eq!(config.discount.annual_rate, 0.05);
    assert_eq!(config.periods.max_periods, 44);
}
