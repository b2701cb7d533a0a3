use crate::error::{PlannerError, Result};
use crate::models::{Macro, MacroSplit, RebalanceRequest};

/// Order in which fields absorb rounding corrections when values tie.
const PRECEDENCE: [Macro; 3] = [Macro::Carb, Macro::Protein, Macro::Fat];

/// Result of a rebalance call.
///
/// `changed` is false when the edit left the split exactly as it was, so the
/// caller can skip saving and redrawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebalanceOutcome {
    pub split: MacroSplit,
    pub changed: bool,
}

/// Keeps a protein/carb/fat split summing to 100 with every macro at or above
/// a floor while one slider moves.
#[derive(Debug, Clone, Copy)]
pub struct MacroRebalancer {
    floor: i32,
}

impl MacroRebalancer {
    /// Create a rebalancer with the given per-macro floor.
    ///
    /// Fails when three floors no longer fit into 100 points.
    pub fn new(floor: i32) -> Result<Self> {
        if floor < 0 {
            return Err(PlannerError::Configuration(format!(
                "macro floor must not be negative (got {})",
                floor
            )));
        }
        if floor > 100 / 3 {
            return Err(PlannerError::Configuration(format!(
                "macro floor {}% is infeasible: three macros need {}% > 100%",
                floor,
                3 * i64::from(floor)
            )));
        }
        Ok(Self { floor })
    }

    pub fn floor(&self) -> i32 {
        self.floor
    }

    /// Legal slider range `(min, max)` for `field` given the current split.
    ///
    /// Carb and fat share whatever protein leaves over, so their maximum
    /// depends on the current protein value.
    pub fn bounds(&self, split: &MacroSplit, field: Macro) -> (i32, i32) {
        let floor = self.floor;
        match field {
            Macro::Protein => (floor, 100 - 2 * floor),
            Macro::Carb | Macro::Fat => {
                let protein = split.protein.clamp(0, 100);
                (floor, (100 - protein - floor).max(floor))
            }
        }
    }

    /// Apply one slider edit to `previous`.
    ///
    /// The requested value is clamped to the field's legal range, the two
    /// untouched fields absorb the difference, and the result is repaired so
    /// it sums to 100 with no field under the floor.
    pub fn rebalance(&self, previous: &MacroSplit, request: RebalanceRequest) -> RebalanceOutcome {
        let floor = self.floor;
        let base = previous.clamped();

        let (min, max) = self.bounds(&base, request.field);
        let value = request.value.min(max).max(min);

        let draft = match request.field {
            Macro::Protein => {
                let (carb, fat) = split_remainder(100 - value, base.carb, base.fat, floor);
                MacroSplit::new(value, carb, fat)
            }
            Macro::Carb => {
                let (carb, fat) = fill_partner(value, base.protein, floor);
                MacroSplit::new(base.protein, carb, fat)
            }
            Macro::Fat => {
                let (fat, carb) = fill_partner(value, base.protein, floor);
                MacroSplit::new(base.protein, carb, fat)
            }
        };

        let next = self.normalize(draft);
        debug_assert!(
            next.is_balanced(floor),
            "rebalance produced {} (floor {}) from {} and {:?}",
            next,
            floor,
            previous,
            request
        );

        if next == *previous {
            RebalanceOutcome {
                split: *previous,
                changed: false,
            }
        } else {
            RebalanceOutcome {
                split: next,
                changed: true,
            }
        }
    }

    /// Restore both invariants on an arbitrary split.
    ///
    /// Fields are first clamped to 0..=100. Any gap to 100 goes to the largest
    /// field that can take it without dropping under the floor, then fields
    /// still under the floor are lifted and the deficit is taken from the
    /// others in proportion to their headroom.
    pub fn normalize(&self, split: MacroSplit) -> MacroSplit {
        let summed = repair_sum(split.clamped(), self.floor);
        lift_to_floor(summed, self.floor)
    }
}

/// Share `remainder` between carb and fat in their previous ratio.
fn split_remainder(remainder: i32, prev_carb: i32, prev_fat: i32, floor: i32) -> (i32, i32) {
    let total = prev_carb + prev_fat;
    let carb_share = if total > 0 {
        (f64::from(prev_carb) / f64::from(total)).clamp(0.0, 1.0)
    } else {
        0.5
    };

    let carb = (f64::from(remainder) * carb_share).round() as i32;
    let fat = remainder - carb;

    if carb < floor {
        (floor, remainder - floor)
    } else if fat < floor {
        (remainder - floor, floor)
    } else {
        (carb, fat)
    }
}

/// Given an edited carb or fat value, return `(edited, partner)` with the
/// partner taking what protein and the edit leave over.
fn fill_partner(edited: i32, protein: i32, floor: i32) -> (i32, i32) {
    let partner = 100 - protein - edited;
    if partner < floor {
        (100 - protein - floor, floor)
    } else {
        (edited, partner)
    }
}

/// Largest field first, ties broken by `PRECEDENCE`.
fn by_size(split: &MacroSplit) -> [Macro; 3] {
    let mut order = PRECEDENCE;
    // stable sort keeps precedence among equal values
    order.sort_by_key(|&m| std::cmp::Reverse(split.get(m)));
    order
}

fn repair_sum(split: MacroSplit, floor: i32) -> MacroSplit {
    let diff = 100 - split.sum();
    if diff == 0 {
        return split;
    }

    let order = by_size(&split);
    let target = order
        .iter()
        .copied()
        .find(|&m| split.get(m) + diff >= floor)
        .unwrap_or(order[0]);

    split.with(target, split.get(target) + diff)
}

/// Expects a split that already sums to 100.
fn lift_to_floor(split: MacroSplit, floor: i32) -> MacroSplit {
    let deficit: i32 = Macro::ALL
        .iter()
        .map(|&m| (floor - split.get(m)).max(0))
        .sum();
    if deficit == 0 {
        return split;
    }

    let mut next = split;
    for m in Macro::ALL {
        if next.get(m) < floor {
            next = next.with(m, floor);
        }
    }

    // Total headroom is 100 + deficit - 3 * floor, which covers the deficit
    // whenever three floors fit into 100.
    let donors: Vec<(Macro, i32)> = PRECEDENCE
        .iter()
        .map(|&m| (m, next.get(m) - floor))
        .filter(|&(_, headroom)| headroom > 0)
        .collect();
    let total_headroom: i32 = donors.iter().map(|&(_, h)| h).sum();

    let mut taken = 0;
    let mut remainders = Vec::with_capacity(donors.len());
    for &(m, headroom) in &donors {
        let share = deficit * headroom / total_headroom;
        next = next.with(m, next.get(m) - share);
        taken += share;
        remainders.push((m, deficit * headroom % total_headroom));
    }

    // Leftover points come from the largest fractional shares.
    remainders.sort_by_key(|&(_, rem)| std::cmp::Reverse(rem));
    for &(m, _) in remainders.iter().take((deficit - taken) as usize) {
        next = next.with(m, next.get(m) - 1);
    }

    next
}
