use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::{PlannerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

/// Activity level used to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary lifestyle",
            ActivityLevel::Light => "Light activity (1-3 workouts/week)",
            ActivityLevel::Moderate => "Moderate activity (3-5 workouts/week)",
            ActivityLevel::Active => "High activity (6-7 workouts/week)",
            ActivityLevel::VeryActive => "Very high activity (physical job or twice a day)",
        }
    }
}

/// Body data entered by the user.
///
/// Numeric fields also load from numeric strings (`"age": "30"`), the shape
/// form inputs leave behind in older state files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Body weight in kilograms.
    #[serde(deserialize_with = "number_or_text")]
    pub weight: f64,

    /// Height in centimeters.
    #[serde(deserialize_with = "number_or_text")]
    pub height: f64,

    /// Age in whole years.
    #[serde(deserialize_with = "number_or_text")]
    pub age: u32,

    pub gender: Gender,

    pub activity_level: ActivityLevel,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            weight: 70.0,
            height: 175.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
        }
    }
}

impl UserProfile {
    pub const WEIGHT_RANGE: (f64, f64) = (20.0, 200.0);
    pub const HEIGHT_RANGE: (f64, f64) = (100.0, 220.0);
    pub const AGE_RANGE: (u32, u32) = (10, 100);

    /// Check every field against its accepted range.
    ///
    /// All problems are reported together rather than stopping at the first.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        let (min_w, max_w) = Self::WEIGHT_RANGE;
        if !(min_w..=max_w).contains(&self.weight) {
            problems.push(format!("weight must be {}-{} kg", min_w, max_w));
        }

        let (min_h, max_h) = Self::HEIGHT_RANGE;
        if !(min_h..=max_h).contains(&self.height) {
            problems.push(format!("height must be {}-{} cm", min_h, max_h));
        }

        let (min_a, max_a) = Self::AGE_RANGE;
        if !(min_a..=max_a).contains(&self.age) {
            problems.push(format!("age must be {}-{} years", min_a, max_a));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(PlannerError::InvalidProfile(problems))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

fn number_or_text<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match NumberOrText::<T>::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid number {:?}: {}", text, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(UserProfile::default().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_all_fields() {
        let profile = UserProfile {
            weight: 250.0,
            height: 90.0,
            age: 5,
            ..Default::default()
        };

        match profile.validate() {
            Err(PlannerError::InvalidProfile(problems)) => assert_eq!(problems.len(), 3),
            other => panic!("expected InvalidProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_bounds_inclusive() {
        let profile = UserProfile {
            weight: 20.0,
            height: 220.0,
            age: 100,
            ..Default::default()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_profile_json_shape() {
        let json = serde_json::to_value(UserProfile::default()).unwrap();
        assert_eq!(json["activityLevel"], "moderate");
        assert_eq!(json["gender"], "male");
    }

    #[test]
    fn test_profile_accepts_numeric_strings() {
        let json = r#"{"weight": "62.5", "height": " 165 ", "age": "28", "gender": "female", "activityLevel": "very_active"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.weight, 62.5);
        assert_eq!(profile.height, 165.0);
        assert_eq!(profile.age, 28);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
    }

    #[test]
    fn test_profile_rejects_non_numeric_text() {
        let json = r#"{"weight": "heavy", "height": 175, "age": 30, "gender": "male", "activityLevel": "moderate"}"#;
        assert!(serde_json::from_str::<UserProfile>(json).is_err());
    }
}
