use crate::error::Result;
use crate::models::{Gender, UserProfile};
use crate::planner::constants::*;

/// BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    SignificantDeficit,
    Underweight,
    Normal,
    Overweight,
    ObesityClass1,
    ObesityClass2,
    ObesityClass3,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 7] = [
        BmiCategory::SignificantDeficit,
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::ObesityClass1,
        BmiCategory::ObesityClass2,
        BmiCategory::ObesityClass3,
    ];

    /// Half-open BMI range `[min, max)`.
    pub fn range(self) -> (f64, f64) {
        match self {
            BmiCategory::SignificantDeficit => (0.0, 16.0),
            BmiCategory::Underweight => (16.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::ObesityClass1 => (30.0, 35.0),
            BmiCategory::ObesityClass2 => (35.0, 40.0),
            BmiCategory::ObesityClass3 => (40.0, f64::INFINITY),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::SignificantDeficit => "Significant underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObesityClass1 => "Obesity class I",
            BmiCategory::ObesityClass2 => "Obesity class II",
            BmiCategory::ObesityClass3 => "Obesity class III",
        }
    }

    /// Category containing `bmi`. Values below zero land in the first band.
    pub fn classify(bmi: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| bmi < c.range().1)
            .unwrap_or(BmiCategory::ObesityClass3)
    }

    pub fn is_underweight(self) -> bool {
        matches!(
            self,
            BmiCategory::SignificantDeficit | BmiCategory::Underweight
        )
    }
}

/// Derived body metrics for a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    pub bmi: f64,
    pub category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
}

impl BodyMetrics {
    /// Validate `profile` and derive BMI, BMR and TDEE from it.
    pub fn compute(profile: &UserProfile) -> Result<Self> {
        profile.validate()?;

        let bmi = calculate_bmi(profile.weight, profile.height);
        let bmr = calculate_bmr(profile);
        Ok(Self {
            bmi,
            category: BmiCategory::classify(bmi),
            bmr,
            tdee: bmr * profile.activity_level.multiplier(),
        })
    }
}

/// Body mass index from kilograms and centimeters.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate (Mifflin-St Jeor).
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    let offset = match profile.gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEFF * profile.weight + BMR_HEIGHT_COEFF * profile.height
        - BMR_AGE_COEFF * f64::from(profile.age)
        + offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(BmiCategory::classify(15.99), BmiCategory::SignificantDeficit);
        assert_eq!(BmiCategory::classify(16.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(39.9), BmiCategory::ObesityClass2);
        assert_eq!(BmiCategory::classify(40.0), BmiCategory::ObesityClass3);
        assert_eq!(BmiCategory::classify(75.0), BmiCategory::ObesityClass3);
    }

    #[test]
    fn test_bmr_female_offset() {
        let male = UserProfile::default();
        let female = UserProfile {
            gender: Gender::Female,
            ..Default::default()
        };
        assert!((calculate_bmr(&male) - calculate_bmr(&female) - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_rejects_invalid_profile() {
        let profile = UserProfile {
            age: 120,
            ..Default::default()
        };
        assert!(BodyMetrics::compute(&profile).is_err());
    }

    #[test]
    fn test_tdee_scales_with_activity() {
        let sedentary = UserProfile {
            activity_level: ActivityLevel::Sedentary,
            ..Default::default()
        };
        let metrics = BodyMetrics::compute(&sedentary).unwrap();
        assert!((metrics.tdee - metrics.bmr * 1.2).abs() < 1e-9);
    }
}
