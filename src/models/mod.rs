mod profile;
mod settings;
mod split;

pub use profile::{ActivityLevel, Gender, UserProfile};
pub use settings::{CalorieGoal, DietSettings};
pub use split::{Macro, MacroSplit, RebalanceRequest};
