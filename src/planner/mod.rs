pub mod breakdown;
pub mod constants;
pub mod goals;
pub mod metrics;
pub mod rebalance;

pub use breakdown::{MacroAmount, MacroBreakdown};
pub use constants::*;
pub use goals::{DietOutcome, classify_outcome, goal_target, resolve_target};
pub use metrics::{BmiCategory, BodyMetrics, calculate_bmi, calculate_bmr};
pub use rebalance::{MacroRebalancer, RebalanceOutcome};
