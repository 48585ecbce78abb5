use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::planner::constants::{
    BULK_PROTEIN_PER_KG, DEFAULT_PROTEIN_PER_KG, GOAL_CALORIE_OFFSET,
};

/// Daily calorie and protein targets the generator adjusts toward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetProfile {
    pub calories: f64,
    pub protein: f64,
}

impl TargetProfile {
    /// Build a target profile. Both values must be finite and positive.
    pub fn new(calories: f64, protein: f64) -> Result<Self> {
        if !(calories.is_finite() && calories > 0.0) {
            return Err(PlanError::InvalidInput(format!(
                "Target calories must be positive, got {}",
                calories
            )));
        }
        if !(protein.is_finite() && protein > 0.0) {
            return Err(PlanError::InvalidInput(format!(
                "Target protein must be positive, got {}",
                protein
            )));
        }
        Ok(Self { calories, protein })
    }

    /// Derive targets from body metrics and a fitness goal.
    ///
    /// `custom_calories`, when set, replaces the derived calorie target.
    pub fn from_metrics(
        metrics: BodyMetrics,
        goal: FitnessGoal,
        custom_calories: Option<f64>,
    ) -> Result<Self> {
        let calories = custom_calories.unwrap_or_else(|| goal.adjust_calories(metrics.tdee()));
        let protein = metrics.weight_kg * goal.protein_per_kg();
        Self::new(calories, protein)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Multiplier applied to BMR.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::ExtraActive => "Extra active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 3] = [
        FitnessGoal::WeightLoss,
        FitnessGoal::Maintenance,
        FitnessGoal::MuscleGain,
    ];

    /// Apply the goal's calorie surplus or deficit.
    pub fn adjust_calories(&self, maintenance: f64) -> f64 {
        match self {
            FitnessGoal::WeightLoss => maintenance - GOAL_CALORIE_OFFSET,
            FitnessGoal::Maintenance => maintenance,
            FitnessGoal::MuscleGain => maintenance + GOAL_CALORIE_OFFSET,
        }
    }

    /// Grams of protein per kg of body weight.
    pub fn protein_per_kg(&self) -> f64 {
        match self {
            FitnessGoal::MuscleGain => BULK_PROTEIN_PER_KG,
            _ => DEFAULT_PROTEIN_PER_KG,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight loss",
            FitnessGoal::Maintenance => "Maintenance",
            FitnessGoal::MuscleGain => "Muscle gain",
        }
    }
}

/// Body measurements used to derive daily energy needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
    pub activity: ActivityLevel,
}

impl BodyMetrics {
    /// Basal metabolic rate (Mifflin-St Jeor).
    pub fn bmr(&self) -> f64 {
        let base = 10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * self.age_years as f64;
        match self.sex {
            Sex::Male => base + 5.0,
            Sex::Female => base - 161.0,
        }
    }

    /// Total daily energy expenditure: BMR scaled by activity level.
    pub fn tdee(&self) -> f64 {
        self.bmr() * self.activity.factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(sex: Sex) -> BodyMetrics {
        BodyMetrics {
            weight_kg: 80.0,
            height_cm: 180.0,
            age_years: 30,
            sex,
            activity: ActivityLevel::ModeratelyActive,
        }
    }

    #[test]
    fn test_bmr_by_sex() {
        // 800 + 1125 - 150
        assert!((metrics(Sex::Male).bmr() - 1780.0).abs() < 1e-9);
        assert!((metrics(Sex::Female).bmr() - 1614.0).abs() < 1e-9);
    }

    #[test]
    fn test_goal_adjusts_calories_and_protein() {
        let m = metrics(Sex::Male);
        let tdee = 1780.0 * 1.55;

        let cut = TargetProfile::from_metrics(m, FitnessGoal::WeightLoss, None).unwrap();
        assert!((cut.calories - (tdee - 500.0)).abs() < 1e-6);
        assert!((cut.protein - 128.0).abs() < 1e-9);

        let bulk = TargetProfile::from_metrics(m, FitnessGoal::MuscleGain, None).unwrap();
        assert!((bulk.calories - (tdee + 500.0)).abs() < 1e-6);
        assert!((bulk.protein - 176.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_calories_override() {
        let t = TargetProfile::from_metrics(
            metrics(Sex::Female),
            FitnessGoal::Maintenance,
            Some(1800.0),
        )
        .unwrap();
        assert_eq!(t.calories, 1800.0);
    }

    #[test]
    fn test_rejects_non_positive_targets() {
        assert!(TargetProfile::new(0.0, 100.0).is_err());
        assert!(TargetProfile::new(2000.0, -5.0).is_err());
        assert!(TargetProfile::new(f64::NAN, 100.0).is_err());
        assert!(TargetProfile::new(2000.0, 100.0).is_ok());
    }
}
