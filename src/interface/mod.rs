mod prompts;
mod render;

pub use prompts::{prompt_macro, prompt_percentage, prompt_yes_no};
pub use render::{display_breakdown, display_goal, display_metrics, display_rebalance};
