//! Helper Functions: Deterministic Data Generation (NO MOCKS)

use goal_ledger_npv::{BenefitProfile, CostProfile, Entity, ProfileSelection, ProfileSelections};

/// Two-entity portfolio used by the reference scenario.
pub fn reference_portfolio() -> Vec<Entity> {
    vec![Entity::new("A", 100.0, 50.0), Entity::new("B", 200.0, 0.0)]
}

/// Generate `count` entities with totals derived from the index.
///
/// Benefits grow linearly, costs follow a sawtooth so some entities carry no
/// cost at all.
pub fn generate_portfolio(count: usize) -> Vec<Entity> {
    (0..count)
        .map(|i| {
            let benefit = 100.0 + 25.0 * i as f64;
            let cost = ((i % 4) as f64) * 40.0;
            Entity::new(format!("GOAL-{i:03}"), benefit, cost)
        })
        .collect()
}

/// Assign profiles round-robin over both registries.
pub fn rotate_selections(entities: &[Entity]) -> ProfileSelections {
    let benefits = BenefitProfile::all();
    let costs = CostProfile::all();
    entities
        .iter()
        .enumerate()
        .map(|(i, e)| {
            (
                e.id.clone(),
                ProfileSelection::new(benefits[i % benefits.len()], costs[i % costs.len()]),
            )
        })
        .collect()
}

/// Assert two floats agree to within `1e-9`.
pub fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{context}: expected {expected}, got {actual}"
    );
}
