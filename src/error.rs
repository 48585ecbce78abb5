use thiserror::Error;

/// Render an optional "did you mean" hint for not-found errors.
fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("No template plans available")]
    EmptyLibrary,

    #[error("Food not found: {name}{}", hint(.suggestion))]
    FoodNotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Template plan not found: {name}{}", hint(.suggestion))]
    TemplateNotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_includes_suggestion() {
        let err = PlanError::FoodNotFound {
            name: "Oat".to_string(),
            suggestion: Some("Oats".to_string()),
        };
        assert_eq!(err.to_string(), "Food not found: Oat (did you mean 'Oats'?)");

        let err = PlanError::TemplateNotFound {
            name: "Bulk".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Template plan not found: Bulk");
    }
}
