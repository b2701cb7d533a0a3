use assert_float_eq::assert_float_absolute_eq;

use macro_planner_rs::models::{Macro, MacroSplit, RebalanceRequest};
use macro_planner_rs::planner::{DEFAULT_MIN_FLOOR, MacroBreakdown, MacroRebalancer};

fn rebalancer() -> MacroRebalancer {
    MacroRebalancer::new(DEFAULT_MIN_FLOOR).unwrap()
}

/// Every balanced split for the given floor.
fn balanced_splits(floor: i32) -> Vec<MacroSplit> {
    let mut splits = Vec::new();
    for protein in floor..=100 - 2 * floor {
        for carb in floor..=100 - protein - floor {
            splits.push(MacroSplit::new(protein, carb, 100 - protein - carb));
        }
    }
    splits
}

#[test]
fn test_invariants_hold_for_all_edits() {
    for floor in [0, 5, 10, 33] {
        let r = MacroRebalancer::new(floor).unwrap();
        for prev in balanced_splits(floor).into_iter().step_by(7) {
            for field in Macro::ALL {
                for value in [-50, 0, floor, 17, 42, 64, 99, 1000] {
                    let out = r.rebalance(&prev, RebalanceRequest::new(field, value));
                    assert!(
                        out.split.is_balanced(floor),
                        "floor {}: {} edit {:?}={} gave {}",
                        floor,
                        prev,
                        field,
                        value,
                        out.split
                    );
                }
            }
        }
    }
}

#[test]
fn test_invariants_hold_for_malformed_previous() {
    let r = rebalancer();
    let malformed = [
        MacroSplit::new(0, 0, 0),
        MacroSplit::new(100, 100, 100),
        MacroSplit::new(98, 1, 1),
        MacroSplit::new(-10, 60, 50),
        MacroSplit::new(i32::MAX, i32::MIN, 3),
    ];

    for prev in malformed {
        for field in Macro::ALL {
            let out = r.rebalance(&prev, RebalanceRequest::new(field, 40));
            assert!(out.split.is_balanced(5), "{} -> {}", prev, out.split);
            assert!(out.changed);
        }
    }
}

#[test]
fn test_noop_edit_is_idempotent() {
    for floor in [0, 5, 10, 33] {
        let r = MacroRebalancer::new(floor).unwrap();
        for prev in balanced_splits(floor) {
            for field in Macro::ALL {
                let out = r.rebalance(&prev, RebalanceRequest::new(field, prev.get(field)));
                assert!(
                    !out.changed,
                    "floor {}: {} {:?} should be unchanged",
                    floor,
                    prev,
                    field
                );
                assert_eq!(out.split, prev);
            }
        }
    }
}

#[test]
fn test_protein_clamped_to_bounds() {
    let prev = MacroSplit::new(30, 40, 30);

    let high = rebalancer().rebalance(&prev, RebalanceRequest::new(Macro::Protein, 1000));
    assert_eq!(high.split.protein, 90);
    assert_eq!(high.split, MacroSplit::new(90, 5, 5));

    let low = rebalancer().rebalance(&prev, RebalanceRequest::new(Macro::Protein, -50));
    assert_eq!(low.split.protein, 5);
    // 95 * 4/7 = 54.29
    assert_eq!(low.split, MacroSplit::new(5, 54, 41));
}

#[test]
fn test_ratio_preservation_example() {
    let prev = MacroSplit::new(30, 40, 30);
    let out = rebalancer().rebalance(&prev, RebalanceRequest::new(Macro::Protein, 50));
    assert_eq!(out.split, MacroSplit::new(50, 29, 21));
    assert_eq!(out.split.sum(), 100);
}

#[test]
fn test_pin_to_floor_example() {
    let prev = MacroSplit::new(10, 85, 5);
    let out = rebalancer().rebalance(&prev, RebalanceRequest::new(Macro::Protein, 90));
    assert_eq!(out.split, MacroSplit::new(90, 5, 5));
}

#[test]
fn test_zero_prior_carb_and_fat_splits_evenly() {
    let r = MacroRebalancer::new(0).unwrap();
    let prev = MacroSplit::new(100, 0, 0);
    let out = r.rebalance(&prev, RebalanceRequest::new(Macro::Protein, 40));
    assert_eq!(out.split, MacroSplit::new(40, 30, 30));
}

#[test]
fn test_floor_configuration() {
    assert!(MacroRebalancer::new(34).is_err());
    assert!(MacroRebalancer::new(33).is_ok());
    assert!(MacroRebalancer::new(i32::MAX).is_err());
}

#[test]
fn test_tight_floor_leaves_one_split() {
    let r = MacroRebalancer::new(33).unwrap();
    let prev = MacroSplit::new(34, 33, 33);
    let out = r.rebalance(&prev, RebalanceRequest::new(Macro::Carb, 80));
    assert_eq!(out.split, MacroSplit::new(34, 33, 33));
    assert!(!out.changed);
}

#[test]
fn test_breakdown_example() {
    let breakdown = MacroBreakdown::compute(&MacroSplit::new(30, 40, 30), 2000.0);

    assert_float_absolute_eq!(breakdown.protein.grams, 150.0, 1e-9);
    assert_float_absolute_eq!(breakdown.carb.grams, 200.0, 1e-9);
    assert_float_absolute_eq!(breakdown.fat.grams, 66.7, 0.05);

    assert_float_absolute_eq!(breakdown.protein.calories, 600.0, 1e-9);
    assert_float_absolute_eq!(breakdown.fat.calories, 600.0, 1e-9);
}
