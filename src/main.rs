use clap::Parser;
use tracing_subscriber::EnvFilter;

use macro_planner_rs::cli::{Cli, Command};
use macro_planner_rs::error::{PlannerError, Result};
use macro_planner_rs::interface::{
    display_breakdown, display_goal, display_metrics, display_rebalance, prompt_macro,
    prompt_percentage, prompt_yes_no,
};
use macro_planner_rs::models::{ActivityLevel, Gender, RebalanceRequest};
use macro_planner_rs::planner::MacroRebalancer;
use macro_planner_rs::state::{JsonFileStore, PlannerSession};

type Session = PlannerSession<JsonFileStore>;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("macro_planner_rs={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // An infeasible floor is refused before any state is touched.
    let rebalancer = MacroRebalancer::new(cli.floor)?;
    let store = JsonFileStore::new(&cli.file);
    let mut session = PlannerSession::open(store, rebalancer)?;

    match cli.command.unwrap_or_default() {
        Command::Show => cmd_show(&session),
        Command::Profile {
            weight,
            height,
            age,
            gender,
            activity,
        } => cmd_profile(&mut session, weight, height, age, gender, activity),
        Command::Goal { goal } => {
            session.set_goal(goal)?;
            cmd_show(&session)
        }
        Command::Calories { kcal } => {
            if !session.set_target_calories(kcal)? {
                println!("Target already {} kcal.", session.target_calories());
            }
            cmd_show(&session)
        }
        Command::Set { field, value } => {
            let previous = session.split();
            let outcome = session.apply(RebalanceRequest::new(field, value))?;
            display_rebalance(&previous, &outcome);
            display_breakdown(&session.breakdown());
            Ok(())
        }
        Command::Edit => cmd_edit(&mut session),
        Command::Reset {
            split,
            profile,
            goal,
        } => cmd_reset(&mut session, split, profile, goal),
    }
}

/// Show everything the session knows.
fn cmd_show(session: &Session) -> Result<()> {
    let state = session.state();
    display_metrics(&state.profile, session.metrics().as_ref());
    display_goal(state.goal, session.target_calories(), session.outcome());
    display_breakdown(&session.breakdown());
    Ok(())
}

/// Merge the given fields into the stored profile.
fn cmd_profile(
    session: &mut Session,
    weight: Option<f64>,
    height: Option<f64>,
    age: Option<u32>,
    gender: Option<Gender>,
    activity: Option<ActivityLevel>,
) -> Result<()> {
    let mut profile = session.state().profile.clone();
    if let Some(weight) = weight {
        profile.weight = weight;
    }
    if let Some(height) = height {
        profile.height = height;
    }
    if let Some(age) = age {
        profile.age = age;
    }
    if let Some(gender) = gender {
        profile.gender = gender;
    }
    if let Some(activity) = activity {
        profile.activity_level = activity;
    }

    session.update_profile(profile)?;
    cmd_show(session)
}

/// Interactive loop: pick a macro, enter a value, repeat until done.
fn cmd_edit(session: &mut Session) -> Result<()> {
    display_breakdown(&session.breakdown());

    loop {
        let split = session.split();
        let Some(field) = prompt_macro(&split, session.rebalancer())? else {
            break;
        };

        let value = match prompt_percentage(field, split.get(field)) {
            Ok(value) => value,
            Err(PlannerError::InvalidInput(msg)) => {
                println!("{}", msg);
                continue;
            }
            Err(e) => return Err(e),
        };

        let outcome = session.apply(RebalanceRequest::new(field, value))?;
        display_rebalance(&split, &outcome);
        display_breakdown(&session.breakdown());

        if !prompt_yes_no("Adjust another macro?", true)? {
            break;
        }
    }

    Ok(())
}

/// Reset the selected parts of the state.
fn cmd_reset(session: &mut Session, split: bool, profile: bool, goal: bool) -> Result<()> {
    if !split && !profile && !goal {
        println!("Please specify at least one reset option:");
        println!("  --split    Reset the macro split to 30/40/30");
        println!("  --profile  Reset the body profile");
        println!("  --goal     Reset the calorie goal to maintenance");
        return Ok(());
    }

    session.reset(split, profile, goal)?;
    println!("State reset.");
    cmd_show(session)
}
