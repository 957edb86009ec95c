use crate::models::{Nutrient, NutritionalData, ScoreType, ValidationError, ValidationRules};

/// Checks nutrient profiles against per-field ranges.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: ValidationRules,
}

impl Validator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate every field; an empty result means the data is acceptable.
    pub fn validate(&self, data: &NutritionalData) -> Vec<ValidationError> {
        Nutrient::ALL
            .into_iter()
            .filter_map(|nutrient| self.check_field(nutrient, data.value(nutrient)))
            .collect()
    }

    /// Check a single value against the configured range.
    pub fn check_field(&self, nutrient: Nutrient, value: f64) -> Option<ValidationError> {
        let bounds = self.rules.bounds(nutrient);
        let message = if !value.is_finite() {
            format!("{} must be a finite number", nutrient.label())
        } else if value < bounds.min {
            format!(
                "{} cannot be less than {:.1} {}",
                nutrient.label(),
                bounds.min,
                nutrient.unit()
            )
        } else if value > bounds.max {
            format!(
                "{} cannot exceed {:.1} {}",
                nutrient.label(),
                bounds.max,
                nutrient.unit()
            )
        } else {
            return None;
        };

        Some(ValidationError {
            field: nutrient.field_name().to_string(),
            value,
            message,
            min: Some(bounds.min),
            max: Some(bounds.max),
        })
    }

    /// Resolve a numeric score-type code.
    pub fn validate_score_code(&self, code: i64) -> Result<ScoreType, ValidationError> {
        ScoreType::try_from(code)
    }
}
