use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, ScoreError};
use crate::models::{Bounds, Nutrient, ValidationRules};

/// Load validation rules from a JSON file.
///
/// The file may list only some nutrients; the rest keep their defaults.
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<ValidationRules> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let overrides: BTreeMap<Nutrient, Bounds> = serde_json::from_str(&content)?;

    tracing::debug!(
        "Loaded {} rule override(s) from {}",
        overrides.len(),
        path.display()
    );

    let rules = ValidationRules::default().with_overrides(overrides);
    rules
        .check()
        .map_err(|msg| ScoreError::InvalidRules(format!("{}: {}", path.display(), msg)))?;
    Ok(rules)
}

/// Load rules from `path` if given, otherwise use the defaults.
pub fn load_rules_or_default(path: Option<&Path>) -> Result<ValidationRules> {
    match path {
        Some(p) => load_rules(p),
        None => Ok(ValidationRules::default()),
    }
}

/// Save the full rule set as pretty JSON.
pub fn save_rules<P: AsRef<Path>>(path: P, rules: &ValidationRules) -> Result<()> {
    let json = serde_json::to_string_pretty(rules)?;
    fs::write(path, json)?;
    Ok(())
}
