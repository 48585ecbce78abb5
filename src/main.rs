use clap::Parser;
use std::path::Path;

use nutri_plan_rs::cli::{Cli, Command, TargetArgs};
use nutri_plan_rs::error::{PlanError, Result};
use nutri_plan_rs::models::TargetProfile;
use nutri_plan_rs::interface::{
    display_food_list, display_generated, display_plan, display_targets, prompt_next_action,
    prompt_plan_name, prompt_target_profile, NextAction,
};
use nutri_plan_rs::planner::{AdjustConfig, PlanGenerator, PlanRotator, TemplateLibrary};
use nutri_plan_rs::state::{
    closest_match, export_csv, load_foods, load_plans, save_generated, FoodCatalog,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or_default();

    match command {
        Command::Generate {
            targets,
            seed,
            output,
            csv,
        } => cmd_generate(&cli, &targets, seed, &output, csv.as_deref()),
        Command::Show { name } => cmd_show(&cli, name.as_deref()),
        Command::Foods => cmd_foods(&cli.foods),
        Command::Targets { targets } => cmd_targets(&targets),
    }
}

/// Load the catalog and resolve the template library against it.
fn load_library(foods_path: &str, plans_path: &str) -> Result<TemplateLibrary> {
    for path in [foods_path, plans_path] {
        if !Path::new(path).exists() {
            return Err(PlanError::InvalidInput(format!("File not found: {}", path)));
        }
    }

    let catalog = FoodCatalog::new(load_foods(foods_path)?);
    let records = load_plans(plans_path)?;
    let library = catalog.build_library(&records)?;

    tracing::debug!(
        foods = catalog.len(),
        templates = library.len(),
        "loaded catalog and templates"
    );
    Ok(library)
}

fn load_config(path: Option<&str>) -> Result<AdjustConfig> {
    let config = match path {
        Some(p) => AdjustConfig::load(p)?,
        None => AdjustConfig::default(),
    };
    tracing::debug!(config = %config.display(), "adjustment settings");
    Ok(config)
}

/// Generate plans until the user saves one or quits.
fn cmd_generate(
    cli: &Cli,
    target_args: &TargetArgs,
    seed: Option<u64>,
    output: &str,
    csv_path: Option<&str>,
) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let library = load_library(&cli.foods, &cli.plans)?;

    if library.is_empty() {
        println!("No nutrition plans available.");
        return Ok(());
    }

    println!("Loaded {} template plans", library.len());

    let targets = resolve_targets(target_args)?;
    display_targets(&targets);

    let rotator = match seed {
        Some(s) => PlanRotator::seeded(s),
        None => PlanRotator::from_entropy(),
    };
    let mut generator = PlanGenerator::new(rotator, config);

    loop {
        let mut generated = generator.generate(&library, &targets)?;
        display_generated(&generated);

        match prompt_next_action()? {
            NextAction::Another => continue,
            NextAction::Quit => break,
            NextAction::Save => {
                let name = prompt_plan_name(generated.name())?;
                generated.rename(name);

                save_generated(output, &generated)?;
                println!("Plan '{}' saved to {}.", generated.name(), output);

                if let Some(path) = csv_path {
                    export_csv(path, &generated)?;
                    println!("Plan exported to {}.", path);
                }
                break;
            }
        }
    }

    Ok(())
}

/// Show one or all template plans.
fn cmd_show(cli: &Cli, name: Option<&str>) -> Result<()> {
    let library = load_library(&cli.foods, &cli.plans)?;

    if library.is_empty() {
        println!("No nutrition plans available.");
        return Ok(());
    }

    match name {
        Some(name) => {
            let plan = library
                .values()
                .find(|p| p.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| PlanError::TemplateNotFound {
                    name: name.to_string(),
                    suggestion: closest_match(name, library.keys().map(String::as_str)),
                })?;
            display_plan(plan);
        }
        None => {
            for plan in library.values() {
                display_plan(plan);
            }
        }
    }

    Ok(())
}

/// List the food catalog.
fn cmd_foods(foods_path: &str) -> Result<()> {
    if !Path::new(foods_path).exists() {
        return Err(PlanError::InvalidInput(format!(
            "File not found: {}",
            foods_path
        )));
    }

    let catalog = FoodCatalog::new(load_foods(foods_path)?);
    display_food_list(&catalog.all_foods(), "Food catalog");
    Ok(())
}

/// Targets from flags, or from prompts with any given flag applied on top.
fn resolve_targets(target_args: &TargetArgs) -> Result<TargetProfile> {
    match target_args.resolve()? {
        Some(t) => Ok(t),
        None => target_args.apply_overrides(prompt_target_profile()?),
    }
}

/// Print targets derived from flags, prompting for anything missing.
fn cmd_targets(target_args: &TargetArgs) -> Result<()> {
    let targets = resolve_targets(target_args)?;
    display_targets(&targets);
    Ok(())
}
