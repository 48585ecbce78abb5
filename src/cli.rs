use clap::{Args, Parser, Subcommand};

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, BodyMetrics, FitnessGoal, Sex, TargetProfile};

/// nutri_plan: adapt template meal plans to daily calorie and protein targets.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "food_items.json")]
    pub foods: String,

    /// Path to the template plan library JSON file.
    #[arg(short, long, default_value = "nutrition_plans.json")]
    pub plans: String,

    /// Optional JSON file overriding adjustment settings.
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate plans adjusted to your targets.
    Generate {
        #[command(flatten)]
        targets: TargetArgs,

        /// Seed for the template rotation (random if omitted).
        #[arg(long)]
        seed: Option<u64>,

        /// File that saved plans are added to.
        #[arg(short, long, default_value = "personal_nutrition_plans.json")]
        output: String,

        /// Also export saved plans as CSV to this path.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Show template plans with their totals.
    Show {
        /// Only show the template with this name.
        #[arg(long)]
        name: Option<String>,
    },

    /// List the food catalog.
    Foods,

    /// Print the targets derived from body metrics.
    Targets {
        #[command(flatten)]
        targets: TargetArgs,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate {
            targets: TargetArgs::default(),
            seed: None,
            output: "personal_nutrition_plans.json".to_string(),
            csv: None,
        }
    }
}

/// Target profile inputs. Missing values are prompted for.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Daily calorie target (overrides the derived value).
    #[arg(long)]
    pub calories: Option<f64>,

    /// Daily protein target in grams.
    #[arg(long)]
    pub protein: Option<f64>,

    /// Body weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long, value_enum, default_value = "male")]
    pub sex: Sex,

    #[arg(long, value_enum, default_value = "sedentary")]
    pub activity: ActivityLevel,

    #[arg(long, value_enum, default_value = "maintenance")]
    pub goal: FitnessGoal,
}

impl Default for TargetArgs {
    fn default() -> Self {
        Self {
            calories: None,
            protein: None,
            weight: None,
            height: None,
            age: None,
            sex: Sex::Male,
            activity: ActivityLevel::Sedentary,
            goal: FitnessGoal::Maintenance,
        }
    }
}

impl TargetArgs {
    /// Body metrics, if all measurements were given.
    pub fn metrics(&self) -> Option<BodyMetrics> {
        Some(BodyMetrics {
            weight_kg: self.weight?,
            height_cm: self.height?,
            age_years: self.age?,
            sex: self.sex,
            activity: self.activity,
        })
    }

    /// Replace the calories or protein of `targets` with any value given as a flag.
    pub fn apply_overrides(&self, targets: TargetProfile) -> Result<TargetProfile> {
        TargetProfile::new(
            self.calories.unwrap_or(targets.calories),
            self.protein.unwrap_or(targets.protein),
        )
    }

    /// Resolve targets from flags alone.
    ///
    /// Explicit calories and protein win; otherwise body metrics are required.
    /// Returns `None` when the flags are not enough and the caller should prompt.
    pub fn resolve(&self) -> Result<Option<TargetProfile>> {
        if let (Some(calories), Some(protein)) = (self.calories, self.protein) {
            return TargetProfile::new(calories, protein).map(Some);
        }

        match self.metrics() {
            Some(metrics) => {
                let mut targets = TargetProfile::from_metrics(metrics, self.goal, self.calories)?;
                if let Some(protein) = self.protein {
                    targets = TargetProfile::new(targets.calories, protein)?;
                }
                Ok(Some(targets))
            }
            None if self.weight.is_some() || self.height.is_some() || self.age.is_some() => {
                Err(PlanError::InvalidInput(
                    "--weight, --height and --age must be given together".to_string(),
                ))
            }
            None => Ok(None),
        }
    }
}
