//! Profile Library Tests
//!
//! Every registered shape across the supported horizon.

use goal_ledger_npv::profile::{self, catalog, ProfileAxis};
use goal_ledger_npv::{round_to, BenefitProfile, CostProfile, Distribution};

const MAX_PERIODS: usize = 44;

fn check_distribution(label: &str, n: usize, d: &Distribution) {
    assert_eq!(d.len(), n, "{label} n={n}: length");
    for (i, f) in d.iter().enumerate() {
        assert!(*f >= 0.0, "{label} n={n}: entry {i} is {f}");
        assert_eq!(round_to(*f, 4), *f, "{label} n={n}: entry {i} not at 4 decimals");
    }
    assert!((d.sum() - 1.0).abs() < 1e-9, "{label} n={n}: sum {}", d.sum());
    assert_eq!(round_to(d.sum(), 4), 1.0, "{label} n={n}");
}

#[test]
fn test_every_benefit_profile_normalizes() {
    for p in BenefitProfile::all() {
        for n in 1..=MAX_PERIODS {
            check_distribution(p.key(), n, &p.generate(n));
        }
    }
}

#[test]
fn test_every_cost_profile_normalizes() {
    for p in CostProfile::all() {
        for n in 1..=MAX_PERIODS {
            check_distribution(p.key(), n, &p.generate(n));
        }
    }
}

#[test]
fn test_generate_by_key_matches_enum() {
    for p in BenefitProfile::all() {
        assert_eq!(
            profile::generate(ProfileAxis::Benefit, p.key(), 9),
            p.generate(9)
        );
    }
    for p in CostProfile::all() {
        assert_eq!(profile::generate(ProfileAxis::Cost, p.key(), 9), p.generate(9));
    }
}

#[test]
fn test_generate_unknown_key_falls_back() {
    assert_eq!(
        profile::generate_benefit("BP_MISSING", 7),
        BenefitProfile::Uniform.generate(7)
    );
    assert_eq!(
        profile::generate_cost("", 7),
        CostProfile::Uniform.generate(7)
    );
}

#[test]
fn test_zero_periods_is_empty_distribution() {
    assert!(BenefitProfile::DelayPeakDet.generate(0).is_empty());
    assert!(CostProfile::LowDevIncreasing.generate(0).is_empty());
}

#[test]
fn test_shapes_have_expected_direction() {
    let n = 12;
    let beginners = BenefitProfile::BeginnersDet.generate(n);
    assert!(beginners.get(0) > beginners.get(n - 1));

    let increasing = CostProfile::LowDevIncreasing.generate(n);
    assert!(increasing.get(n - 1) > increasing.get(1));

    let delayed = BenefitProfile::DelayUniform.generate(n);
    assert_eq!(delayed.get(0), 0.0);
    assert_eq!(delayed.get(2), 0.0);
    assert!(delayed.get(3) > 0.0);
}

#[test]
fn test_catalog_lists_each_registry() {
    let benefits = catalog(ProfileAxis::Benefit);
    assert_eq!(benefits.len(), 6);
    assert_eq!(benefits.iter().filter(|i| i.is_default).count(), 1);
    assert_eq!(benefits[0].key, "BP_UNIFORM");

    let costs = catalog(ProfileAxis::Cost);
    assert_eq!(costs.len(), 5);
    assert!(costs.iter().all(|i| i.axis == ProfileAxis::Cost));
    assert!(costs.iter().all(|i| !i.label.is_empty() && !i.description.is_empty()));
}
