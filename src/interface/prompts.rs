use dialoguer::{Confirm, Input, Select};

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, BodyMetrics, FitnessGoal, Sex, TargetProfile};

/// What to do after a plan has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Another,
    Save,
    Quit,
}

/// Prompt for a positive number.
fn prompt_positive(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if value <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "Expected a positive number, got {}",
            value
        )));
    }

    Ok(value)
}

/// Prompt for body metrics.
pub fn prompt_body_metrics() -> Result<BodyMetrics> {
    let weight_kg = prompt_positive("Weight (kg)", "75")?;
    let height_cm = prompt_positive("Height (cm)", "175")?;
    let age_years = prompt_positive("Age (years)", "30")?.round() as u32;

    let sex = match Select::new()
        .with_prompt("Sex")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?
    {
        0 => Sex::Male,
        _ => Sex::Female,
    };

    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(BodyMetrics {
        weight_kg,
        height_cm,
        age_years,
        sex,
        activity: ActivityLevel::ALL[selection],
    })
}

/// Prompt for the fitness goal.
pub fn prompt_fitness_goal() -> Result<FitnessGoal> {
    let labels: Vec<&str> = FitnessGoal::ALL.iter().map(|g| g.label()).collect();
    let selection = Select::new()
        .with_prompt("Fitness goal")
        .items(&labels)
        .default(1)
        .interact()?;

    Ok(FitnessGoal::ALL[selection])
}

/// Collect body metrics and a goal, then derive the target profile.
pub fn prompt_target_profile() -> Result<TargetProfile> {
    let metrics = prompt_body_metrics()?;
    let goal = prompt_fitness_goal()?;

    let custom = if prompt_yes_no("Use a custom daily calorie target?", false)? {
        Some(prompt_positive("Daily calories", "2000")?)
    } else {
        None
    };

    TargetProfile::from_metrics(metrics, goal, custom)
}

/// Ask whether to generate another plan, save this one, or stop.
pub fn prompt_next_action() -> Result<NextAction> {
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&["Generate another plan", "Save this plan", "Quit"])
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => NextAction::Another,
        1 => NextAction::Save,
        _ => NextAction::Quit,
    })
}

/// Prompt for the name to save a plan under.
pub fn prompt_plan_name(default: &str) -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Plan name")
        .default(default.to_string())
        .interact_text()?;

    let name = name.trim();
    if name.is_empty() {
        return Err(PlanError::InvalidInput("Plan name cannot be empty".to_string()));
    }

    Ok(name.to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
