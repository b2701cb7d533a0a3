use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::MacroSplit;

/// What the target calorie count is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalorieGoal {
    Loss,
    #[default]
    Maintenance,
    Gain,
    /// The user typed the target in directly.
    Custom,
}

impl CalorieGoal {
    pub fn label(self) -> &'static str {
        match self {
            CalorieGoal::Loss => "weight loss",
            CalorieGoal::Maintenance => "weight maintenance",
            CalorieGoal::Gain => "weight gain",
            CalorieGoal::Custom => "custom calorie target",
        }
    }
}

impl fmt::Display for CalorieGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Daily calorie target plus the macro split applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DietSettings {
    /// Zero until derived from TDEE or set by hand.
    #[serde(rename = "targetCalories")]
    pub target_calories: u32,

    #[serde(flatten)]
    pub split: MacroSplit,
}

impl DietSettings {
    pub fn new(target_calories: u32, split: MacroSplit) -> Self {
        Self {
            target_calories,
            split,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_settings_flat_json() {
        let settings = DietSettings::new(2000, MacroSplit::new(30, 40, 30));
        let json = serde_json::to_value(settings).unwrap();

        assert_eq!(json["targetCalories"], 2000);
        assert_eq!(json["proteinPercentage"], 30);
        assert_eq!(json["carbPercentage"], 40);
        assert_eq!(json["fatPercentage"], 30);
    }

    #[test]
    fn test_diet_settings_parse() {
        let json = r#"{"targetCalories": 1800, "proteinPercentage": 25, "carbPercentage": 50, "fatPercentage": 25}"#;
        let settings: DietSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.target_calories, 1800);
        assert_eq!(settings.split, MacroSplit::new(25, 50, 25));
    }

    #[test]
    fn test_goal_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CalorieGoal::Custom).unwrap(), "\"custom\"");
    }
}
