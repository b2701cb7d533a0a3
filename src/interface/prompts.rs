use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{Macro, MacroSplit};
use crate::planner::MacroRebalancer;

/// Ask which macro to adjust. Returns `None` when the user chooses to finish.
pub fn prompt_macro(split: &MacroSplit, rebalancer: &MacroRebalancer) -> Result<Option<Macro>> {
    let mut options: Vec<String> = Macro::ALL
        .iter()
        .map(|&m| {
            let (min, max) = rebalancer.bounds(split, m);
            format!("{:<8} {:>3}%  (range {}-{})", m.label(), split.get(m), min, max)
        })
        .collect();
    options.push("Done".to_string());

    let selection = Select::new()
        .with_prompt("Which macro do you want to adjust?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Macro::ALL.get(selection).copied())
}

/// Ask for a new percentage. Out-of-range values are accepted and clamped
/// later by the rebalancer.
pub fn prompt_percentage(field: Macro, current: i32) -> Result<i32> {
    let input: String = Input::new()
        .with_prompt(format!("New {} percentage", field.label().to_lowercase()))
        .default(current.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a whole number", input)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
