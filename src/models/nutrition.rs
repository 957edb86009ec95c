use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven per-100g nutrient fields that feed the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Energy,
    Sugars,
    SaturatedFattyAcids,
    Sodium,
    Fruits,
    Fibre,
    Protein,
}

impl Nutrient {
    /// All nutrients in validation and display order.
    pub const ALL: [Nutrient; 7] = [
        Nutrient::Energy,
        Nutrient::Sugars,
        Nutrient::SaturatedFattyAcids,
        Nutrient::Sodium,
        Nutrient::Fruits,
        Nutrient::Fibre,
        Nutrient::Protein,
    ];

    /// Field name used in errors, rule files and CSV headers.
    pub fn field_name(self) -> &'static str {
        match self {
            Nutrient::Energy => "energy",
            Nutrient::Sugars => "sugars",
            Nutrient::SaturatedFattyAcids => "saturated_fatty_acids",
            Nutrient::Sodium => "sodium",
            Nutrient::Fruits => "fruits",
            Nutrient::Fibre => "fibre",
            Nutrient::Protein => "protein",
        }
    }

    /// Human-readable label for messages.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Energy => "Energy",
            Nutrient::Sugars => "Sugar content",
            Nutrient::SaturatedFattyAcids => "Saturated fat content",
            Nutrient::Sodium => "Sodium content",
            Nutrient::Fruits => "Fruits/vegetables/nuts percentage",
            Nutrient::Fibre => "Fibre content",
            Nutrient::Protein => "Protein content",
        }
    }

    /// Unit suffix, always per 100g (or 100ml).
    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Energy => "kJ per 100g",
            Nutrient::Sodium => "mg per 100g",
            Nutrient::Fruits => "%",
            _ => "g per 100g",
        }
    }

    /// Whether the nutrient contributes negative (limit) points.
    pub fn is_negative(self) -> bool {
        matches!(
            self,
            Nutrient::Energy | Nutrient::Sugars | Nutrient::SaturatedFattyAcids | Nutrient::Sodium
        )
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Nutrient profile of one item, all values per 100g (or 100ml).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalData {
    /// Energy in kJ.
    pub energy: f64,
    /// Sugars in g.
    pub sugars: f64,
    /// Saturated fatty acids in g.
    pub saturated_fatty_acids: f64,
    /// Sodium in mg.
    pub sodium: f64,
    /// Fruit/vegetable/nut fraction in %.
    pub fruits: f64,
    /// Fibre in g.
    pub fibre: f64,
    /// Protein in g.
    pub protein: f64,
}

impl NutritionalData {
    pub fn value(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Sugars => self.sugars,
            Nutrient::SaturatedFattyAcids => self.saturated_fatty_acids,
            Nutrient::Sodium => self.sodium,
            Nutrient::Fruits => self.fruits,
            Nutrient::Fibre => self.fibre,
            Nutrient::Protein => self.protein,
        }
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "E:{} kJ S:{} g SF:{} g Na:{} mg F:{}% Fb:{} g P:{} g",
            self.energy,
            self.sugars,
            self.saturated_fatty_acids,
            self.sodium,
            self.fruits,
            self.fibre,
            self.protein
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_lookup_matches_fields() {
        let data = NutritionalData {
            energy: 1.0,
            sugars: 2.0,
            saturated_fatty_acids: 3.0,
            sodium: 4.0,
            fruits: 5.0,
            fibre: 6.0,
            protein: 7.0,
        };
        let values: Vec<f64> = Nutrient::ALL.iter().map(|n| data.value(*n)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_field_names_match_serde() {
        for nutrient in Nutrient::ALL {
            let json = serde_json::to_string(&nutrient).unwrap();
            assert_eq!(json, format!("\"{}\"", nutrient.field_name()));
        }
    }

    #[test]
    fn test_negative_split() {
        let negatives = Nutrient::ALL.iter().filter(|n| n.is_negative()).count();
        assert_eq!(negatives, 4);
    }
}
