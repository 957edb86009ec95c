use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Nutrient;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub value: f64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ValidationError {
    /// Error for a field that has no numeric bounds (e.g. an enum tag).
    pub fn unbounded(field: &str, value: f64, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value,
            message: message.into(),
            min: None,
            max: None,
        }
    }
}

/// Inclusive acceptable range for one nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Per-nutrient acceptable ranges used by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationRules {
    bounds: BTreeMap<Nutrient, Bounds>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        let bounds = Nutrient::ALL
            .into_iter()
            .map(|n| (n, default_bounds(n)))
            .collect();
        Self { bounds }
    }
}

/// Built-in range for a nutrient.
pub fn default_bounds(nutrient: Nutrient) -> Bounds {
    match nutrient {
        Nutrient::Energy => Bounds::new(0.0, 4000.0),
        Nutrient::Sugars => Bounds::new(0.0, 100.0),
        Nutrient::SaturatedFattyAcids => Bounds::new(0.0, 100.0),
        Nutrient::Sodium => Bounds::new(0.0, 10000.0),
        Nutrient::Fruits => Bounds::new(0.0, 100.0),
        Nutrient::Fibre => Bounds::new(0.0, 50.0),
        Nutrient::Protein => Bounds::new(0.0, 100.0),
    }
}

impl ValidationRules {
    /// Range for a nutrient, falling back to the built-in default.
    pub fn bounds(&self, nutrient: Nutrient) -> Bounds {
        self.bounds
            .get(&nutrient)
            .copied()
            .unwrap_or_else(|| default_bounds(nutrient))
    }

    pub fn set(&mut self, nutrient: Nutrient, bounds: Bounds) {
        self.bounds.insert(nutrient, bounds);
    }

    /// Overlay partial overrides on top of these rules.
    pub fn with_overrides(mut self, overrides: BTreeMap<Nutrient, Bounds>) -> Self {
        self.bounds.extend(overrides);
        self
    }

    /// Reject rule sets that could never accept a value.
    pub fn check(&self) -> Result<(), String> {
        for nutrient in Nutrient::ALL {
            let b = self.bounds(nutrient);
            if !b.min.is_finite() || !b.max.is_finite() {
                return Err(format!("{} bounds must be finite numbers", nutrient));
            }
            if b.min < 0.0 {
                return Err(format!("{} min must not be negative", nutrient));
            }
            if b.min > b.max {
                return Err(format!(
                    "{} min ({}) is greater than max ({})",
                    nutrient, b.min, b.max
                ));
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, Bounds)> + '_ {
        Nutrient::ALL.into_iter().map(|n| (n, self.bounds(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_cover_all_nutrients() {
        let rules = ValidationRules::default();
        assert_eq!(rules.iter().count(), 7);
        assert_eq!(rules.bounds(Nutrient::Sodium), Bounds::new(0.0, 10000.0));
        assert_eq!(rules.bounds(Nutrient::Fibre), Bounds::new(0.0, 50.0));
        assert!(rules.check().is_ok());
    }

    #[test]
    fn test_overrides_keep_untouched_fields() {
        let mut overrides = BTreeMap::new();
        overrides.insert(Nutrient::Energy, Bounds::new(10.0, 3000.0));
        let rules = ValidationRules::default().with_overrides(overrides);

        assert_eq!(rules.bounds(Nutrient::Energy), Bounds::new(10.0, 3000.0));
        assert_eq!(rules.bounds(Nutrient::Protein), Bounds::new(0.0, 100.0));
    }

    #[test]
    fn test_check_rejects_inverted_bounds() {
        let mut rules = ValidationRules::default();
        rules.set(Nutrient::Sugars, Bounds::new(50.0, 10.0));
        let err = rules.check().unwrap_err();
        assert!(err.contains("sugars"));
    }

    #[test]
    fn test_check_rejects_non_finite_bounds() {
        let mut rules = ValidationRules::default();
        rules.set(Nutrient::Protein, Bounds::new(0.0, f64::INFINITY));
        assert!(rules.check().is_err());
    }

    #[test]
    fn test_check_rejects_negative_min() {
        let mut rules = ValidationRules::default();
        rules.set(Nutrient::Energy, Bounds::new(-500.0, 4000.0));
        let err = rules.check().unwrap_err();
        assert_eq!(err, "energy min must not be negative");

        rules.set(Nutrient::Energy, Bounds::new(0.0, 4000.0));
        assert!(rules.check().is_ok());
    }

    #[test]
    fn test_bounds_inclusive() {
        let b = Bounds::new(0.0, 100.0);
        assert!(b.contains(0.0));
        assert!(b.contains(100.0));
        assert!(!b.contains(-0.1));
        assert!(!b.contains(100.1));
        assert!(!b.contains(f64::NAN));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::unbounded("score_type", 7.0, "Invalid score type");
        assert_eq!(err.to_string(), "score_type: Invalid score type");
    }
}
