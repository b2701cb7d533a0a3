use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the three macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Macro {
    Protein,
    Carb,
    Fat,
}

impl Macro {
    pub const ALL: [Macro; 3] = [Macro::Protein, Macro::Carb, Macro::Fat];

    /// Energy density in kcal per gram.
    pub fn kcal_per_gram(self) -> f64 {
        match self {
            Macro::Protein => 4.0,
            Macro::Carb => 4.0,
            Macro::Fat => 9.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Macro::Protein => "Protein",
            Macro::Carb => "Carbs",
            Macro::Fat => "Fat",
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A protein/carb/fat split in whole percentage points.
///
/// A split produced by the rebalancer always sums to 100 with every field at
/// or above the configured floor. Splits loaded from storage may not, so
/// nothing here assumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroSplit {
    #[serde(rename = "proteinPercentage")]
    pub protein: i32,

    #[serde(rename = "carbPercentage")]
    pub carb: i32,

    #[serde(rename = "fatPercentage")]
    pub fat: i32,
}

impl MacroSplit {
    pub const fn new(protein: i32, carb: i32, fat: i32) -> Self {
        Self { protein, carb, fat }
    }

    pub fn get(&self, field: Macro) -> i32 {
        match field {
            Macro::Protein => self.protein,
            Macro::Carb => self.carb,
            Macro::Fat => self.fat,
        }
    }

    /// Copy of this split with one field replaced.
    pub fn with(mut self, field: Macro, value: i32) -> Self {
        match field {
            Macro::Protein => self.protein = value,
            Macro::Carb => self.carb = value,
            Macro::Fat => self.fat = value,
        }
        self
    }

    pub fn sum(&self) -> i32 {
        self.protein.saturating_add(self.carb).saturating_add(self.fat)
    }

    /// Copy with every field clamped into 0..=100.
    pub fn clamped(self) -> Self {
        Self::new(
            self.protein.clamp(0, 100),
            self.carb.clamp(0, 100),
            self.fat.clamp(0, 100),
        )
    }

    /// True when the split sums to 100 and no field is below `floor`.
    pub fn is_balanced(&self, floor: i32) -> bool {
        self.sum() == 100 && Macro::ALL.iter().all(|&m| self.get(m) >= floor)
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self::new(30, 40, 30)
    }
}

impl fmt::Display for MacroSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P {}% / C {}% / F {}%", self.protein, self.carb, self.fat)
    }
}

/// A single slider edit: which macro moved and the raw value it was dragged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebalanceRequest {
    pub field: Macro,
    pub value: i32,
}

impl RebalanceRequest {
    pub fn new(field: Macro, value: i32) -> Self {
        Self { field, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split_is_balanced() {
        let split = MacroSplit::default();
        assert_eq!(split, MacroSplit::new(30, 40, 30));
        assert!(split.is_balanced(5));
    }

    #[test]
    fn test_with_replaces_one_field() {
        let split = MacroSplit::default().with(Macro::Fat, 12);
        assert_eq!(split.fat, 12);
        assert_eq!(split.protein, 30);
        assert_eq!(split.carb, 40);
        assert!(!split.is_balanced(5));
    }

    #[test]
    fn test_is_balanced_checks_floor() {
        assert!(!MacroSplit::new(2, 49, 49).is_balanced(5));
        assert!(MacroSplit::new(2, 49, 49).is_balanced(0));
    }
}
