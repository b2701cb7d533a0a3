use clap::{Parser, Subcommand};

use crate::models::{ActivityLevel, CalorieGoal, Gender, Macro};
use crate::planner::DEFAULT_MIN_FLOOR;

/// MacroPlanner — body metrics, calorie targets and a self-balancing macro split.
#[derive(Parser, Debug)]
#[command(name = "macro_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the planner state JSON file.
    #[arg(short, long, default_value = "planner_state.json")]
    pub file: String,

    /// Minimum percentage any macro may be assigned.
    #[arg(long, env = "MACRO_PLANNER_FLOOR", default_value_t = DEFAULT_MIN_FLOOR, allow_negative_numbers = true)]
    pub floor: i32,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show profile, metrics, calorie target and macro breakdown.
    Show,

    /// Update the body profile.
    Profile {
        /// Weight in kilograms.
        #[arg(long)]
        weight: Option<f64>,

        /// Height in centimeters.
        #[arg(long)]
        height: Option<f64>,

        /// Age in years.
        #[arg(long)]
        age: Option<u32>,

        #[arg(long, value_enum)]
        gender: Option<Gender>,

        #[arg(long, value_enum)]
        activity: Option<ActivityLevel>,
    },

    /// Choose a calorie goal; the target follows TDEE unless custom.
    Goal {
        #[arg(value_enum)]
        goal: CalorieGoal,
    },

    /// Set a custom daily calorie target.
    Calories {
        #[arg(allow_negative_numbers = true)]
        kcal: i64,
    },

    /// Move one macro; the other two rebalance around it.
    Set {
        #[arg(value_enum)]
        field: Macro,

        #[arg(allow_negative_numbers = true)]
        value: i32,
    },

    /// Adjust macros interactively.
    Edit,

    /// Reset state values to their defaults.
    Reset {
        /// Reset the macro split to 30/40/30.
        #[arg(long)]
        split: bool,

        /// Reset the body profile.
        #[arg(long)]
        profile: bool,

        /// Reset the calorie goal to maintenance.
        #[arg(long)]
        goal: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Show
    }
}
