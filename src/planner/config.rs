use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::planner::constants::*;

/// Runtime-configurable adjustment policy.
///
/// Every field defaults to its constant, so a config file only needs the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustConfig {
    pub protein_dense_threshold: f64,
    pub protein_step_grams: f64,
    pub filler_step_grams: f64,
    pub fine_step_grams: f64,
    pub max_iterations: usize,
    pub protein_category: String,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            protein_dense_threshold: PROTEIN_DENSE_THRESHOLD,
            protein_step_grams: PROTEIN_STEP_GRAMS,
            filler_step_grams: FILLER_STEP_GRAMS,
            fine_step_grams: FINE_STEP_GRAMS,
            max_iterations: MAX_ITERATIONS,
            protein_category: PROTEIN_CATEGORY.to_string(),
        }
    }
}

impl AdjustConfig {
    /// Load a config from a JSON file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AdjustConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject step sizes and caps that would stall or reverse the phases.
    pub fn validate(&self) -> Result<()> {
        let steps = [
            ("protein_step_grams", self.protein_step_grams),
            ("filler_step_grams", self.filler_step_grams),
            ("fine_step_grams", self.fine_step_grams),
        ];
        for (name, value) in steps {
            if !(value.is_finite() && value > 0.0) {
                return Err(PlanError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if !(self.protein_dense_threshold.is_finite() && self.protein_dense_threshold >= 0.0) {
            return Err(PlanError::InvalidConfig(format!(
                "protein_dense_threshold must be non-negative, got {}",
                self.protein_dense_threshold
            )));
        }

        if self.max_iterations == 0 {
            return Err(PlanError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Compact one-line form for logs.
    pub fn display(&self) -> String {
        format!(
            "threshold={:.1} protein_step={:.1} filler_step={:.1} fine_step={:.1} cap={} category={}",
            self.protein_dense_threshold,
            self.protein_step_grams,
            self.filler_step_grams,
            self.fine_step_grams,
            self.max_iterations,
            self.protein_category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_matches_constants() {
        let config = AdjustConfig::default();
        assert_eq!(config.protein_dense_threshold, 15.0);
        assert_eq!(config.protein_step_grams, 10.0);
        assert_eq!(config.fine_step_grams, 1.0);
        assert_eq!(config.max_iterations, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"max_iterations": 50, "protein_category": "meat"}"#)
            .unwrap();

        let config = AdjustConfig::load(file.path()).unwrap();
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.protein_category, "meat");
        assert_eq!(config.filler_step_grams, FILLER_STEP_GRAMS);
    }

    #[test]
    fn test_validate_rejects_zero_step() {
        let config = AdjustConfig {
            fine_step_grams: 0.0,
            ..AdjustConfig::default()
        };
        assert!(matches!(config.validate(), Err(PlanError::InvalidConfig(_))));

        let config = AdjustConfig {
            max_iterations: 0,
            ..AdjustConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
