/// Default minimum percentage any single macro may be assigned.
pub const DEFAULT_MIN_FLOOR: i32 = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie goals
// ─────────────────────────────────────────────────────────────────────────────

/// Deficit applied to TDEE for the weight-loss goal (15%).
pub const WEIGHT_LOSS_FRACTION: f64 = 0.15;

/// Surplus applied to TDEE for the weight-gain goal (15%).
pub const WEIGHT_GAIN_FRACTION: f64 = 0.15;

/// A target within this fraction of TDEE is treated as maintenance.
pub const MAINTENANCE_TOLERANCE: f64 = 0.05;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
pub const BMR_AGE_COEFF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;
