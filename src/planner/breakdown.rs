use crate::models::{Macro, MacroSplit};

/// Calories and grams for one macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroAmount {
    pub nutrient: Macro,
    pub percentage: i32,
    pub calories: f64,
    pub grams: f64,
}

/// Per-macro calories and grams for a calorie target.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroBreakdown {
    pub target_calories: f64,
    pub protein: MacroAmount,
    pub carb: MacroAmount,
    pub fat: MacroAmount,
}

impl MacroBreakdown {
    /// Split `target_calories` by percentage and convert each share to grams.
    pub fn compute(split: &MacroSplit, target_calories: f64) -> Self {
        let amount = |nutrient: Macro| {
            let percentage = split.get(nutrient);
            let calories = target_calories * f64::from(percentage) / 100.0;
            MacroAmount {
                nutrient,
                percentage,
                calories,
                grams: calories / nutrient.kcal_per_gram(),
            }
        };

        Self {
            target_calories,
            protein: amount(Macro::Protein),
            carb: amount(Macro::Carb),
            fat: amount(Macro::Fat),
        }
    }

    pub fn amounts(&self) -> [&MacroAmount; 3] {
        [&self.protein, &self.carb, &self.fat]
    }

    pub fn total_calories(&self) -> f64 {
        self.amounts().iter().map(|a| a.calories).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_target() {
        let breakdown = MacroBreakdown::compute(&MacroSplit::default(), 0.0);
        for amount in breakdown.amounts() {
            assert_eq!(amount.calories, 0.0);
            assert_eq!(amount.grams, 0.0);
        }
    }

    #[test]
    fn test_total_matches_target() {
        let breakdown = MacroBreakdown::compute(&MacroSplit::new(25, 45, 30), 2300.0);
        assert!((breakdown.total_calories() - 2300.0).abs() < 1e-9);
    }
}
