use crate::models::CalorieGoal;
use crate::planner::constants::{MAINTENANCE_TOLERANCE, WEIGHT_GAIN_FRACTION, WEIGHT_LOSS_FRACTION};

/// Expected effect of eating at the target calorie count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietOutcome {
    WeightLoss,
    Maintenance,
    WeightGain,
}

impl DietOutcome {
    pub fn describe(self, target_calories: u32) -> String {
        match self {
            DietOutcome::WeightLoss => {
                format!("This plan ({} kcal) will lead to weight loss.", target_calories)
            }
            DietOutcome::Maintenance => {
                format!("This plan ({} kcal) will help maintain your current weight.", target_calories)
            }
            DietOutcome::WeightGain => {
                format!("This plan ({} kcal) will lead to weight gain.", target_calories)
            }
        }
    }
}

/// Target calories implied by a goal.
///
/// Returns `None` for `Custom`, whose target is whatever the user set.
pub fn goal_target(goal: CalorieGoal, tdee: f64) -> Option<u32> {
    let target = match goal {
        CalorieGoal::Loss => tdee * (1.0 - WEIGHT_LOSS_FRACTION),
        CalorieGoal::Maintenance => tdee,
        CalorieGoal::Gain => tdee * (1.0 + WEIGHT_GAIN_FRACTION),
        CalorieGoal::Custom => return None,
    };
    Some(round_calories(target))
}

/// Target to use after TDEE or the goal changes.
///
/// Non-custom goals always follow TDEE. A custom target is kept, except that
/// an unset (zero) target starts out at TDEE.
pub fn resolve_target(goal: CalorieGoal, tdee: f64, current: u32) -> u32 {
    match goal_target(goal, tdee) {
        Some(target) => target,
        None if current == 0 => round_calories(tdee),
        None => current,
    }
}

/// Classify a target relative to TDEE with a tolerance band around it.
pub fn classify_outcome(target_calories: u32, tdee: f64) -> DietOutcome {
    let diff = f64::from(target_calories) - tdee;
    let threshold = tdee * MAINTENANCE_TOLERANCE;

    if diff < -threshold {
        DietOutcome::WeightLoss
    } else if diff > threshold {
        DietOutcome::WeightGain
    } else {
        DietOutcome::Maintenance
    }
}

fn round_calories(kcal: f64) -> u32 {
    kcal.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_target() {
        assert_eq!(goal_target(CalorieGoal::Maintenance, 2000.4), Some(2000));
        assert_eq!(goal_target(CalorieGoal::Loss, 2000.0), Some(1700));
        assert_eq!(goal_target(CalorieGoal::Gain, 2000.0), Some(2300));
        assert_eq!(goal_target(CalorieGoal::Custom, 2000.0), None);
    }

    #[test]
    fn test_resolve_custom_target() {
        assert_eq!(resolve_target(CalorieGoal::Custom, 2100.0, 1500), 1500);
        assert_eq!(resolve_target(CalorieGoal::Custom, 2100.0, 0), 2100);
        assert_eq!(resolve_target(CalorieGoal::Gain, 2000.0, 1500), 2300);
    }

    #[test]
    fn test_classify_outcome() {
        assert_eq!(classify_outcome(1700, 2000.0), DietOutcome::WeightLoss);
        assert_eq!(classify_outcome(1900, 2000.0), DietOutcome::Maintenance);
        assert_eq!(classify_outcome(2100, 2000.0), DietOutcome::Maintenance);
        assert_eq!(classify_outcome(2101, 2000.0), DietOutcome::WeightGain);
    }
}
