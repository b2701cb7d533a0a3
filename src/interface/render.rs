use crate::models::{CalorieGoal, MacroSplit, UserProfile};
use crate::planner::{BodyMetrics, DietOutcome, MacroBreakdown, RebalanceOutcome};

/// Width of the split bar in characters.
const BAR_WIDTH: usize = 50;

/// Display the profile and its derived metrics.
pub fn display_metrics(profile: &UserProfile, metrics: Option<&BodyMetrics>) {
    println!();
    println!("=== Profile ===");
    println!(
        "{} kg, {} cm, {} years, {}",
        profile.weight, profile.height, profile.age, profile.gender
    );
    println!("Activity: {}", profile.activity_level.description());
    println!();

    match metrics {
        Some(m) => {
            println!("BMI:  {:.1} ({})", m.bmi, m.category.label());
            println!("BMR:  {:.0} kcal", m.bmr);
            println!("TDEE: {:.0} kcal", m.tdee);
            if m.category.is_underweight() {
                println!("Note: your BMI is below the healthy range; consider a weight-gain goal.");
            }
        }
        None => println!("Profile is out of range; metrics unavailable."),
    }
}

/// Display the goal, target calories and expected outcome.
pub fn display_goal(goal: CalorieGoal, target_calories: u32, outcome: Option<DietOutcome>) {
    println!();
    println!("=== Diet ===");
    println!("Goal: {}", goal);
    println!("Target: {} kcal/day", target_calories);
    if let Some(outcome) = outcome {
        println!("{}", outcome.describe(target_calories));
    }
}

/// Display the split as a bar followed by per-macro grams and calories.
pub fn display_breakdown(breakdown: &MacroBreakdown) {
    println!();
    println!("=== Your plate ({:.0} kcal) ===", breakdown.target_calories);
    println!();
    println!("[{}]", split_bar(breakdown));
    println!();

    for amount in breakdown.amounts() {
        println!(
            "  {:<8} {:>3}%  {:>5.0} g  ({:.0} kcal)",
            amount.nutrient.label(),
            amount.percentage,
            amount.grams,
            amount.calories
        );
    }
    println!();
}

/// Report the result of a single edit.
pub fn display_rebalance(previous: &MacroSplit, outcome: &RebalanceOutcome) {
    if outcome.changed {
        println!("{}  ->  {}", previous, outcome.split);
    } else {
        println!("Split unchanged: {}", outcome.split);
    }
}

/// `P` / `C` / `F` characters proportional to each percentage.
fn split_bar(breakdown: &MacroBreakdown) -> String {
    let mut bar = String::with_capacity(BAR_WIDTH);
    let mut used = 0;
    let amounts = breakdown.amounts();

    for (i, amount) in amounts.iter().enumerate() {
        let cells = if i == amounts.len() - 1 {
            BAR_WIDTH.saturating_sub(used)
        } else {
            (amount.percentage.max(0) as usize * BAR_WIDTH + 50) / 100
        };
        let symbol = amount.nutrient.label().chars().next().unwrap_or('?');
        bar.extend(std::iter::repeat_n(symbol, cells));
        used += cells;
    }

    bar
}
