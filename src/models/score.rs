use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::ValidationError;

/// Category selecting which combination rule applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreType {
    #[default]
    Food,
    Beverage,
    Water,
    Cheese,
}

impl ScoreType {
    pub const ALL: [ScoreType; 4] = [
        ScoreType::Food,
        ScoreType::Beverage,
        ScoreType::Water,
        ScoreType::Cheese,
    ];

    /// Numeric code: 0 Food, 1 Beverage, 2 Water, 3 Cheese.
    pub fn code(self) -> i64 {
        match self {
            ScoreType::Food => 0,
            ScoreType::Beverage => 1,
            ScoreType::Water => 2,
            ScoreType::Cheese => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreType::Food => "Food",
            ScoreType::Beverage => "Beverage",
            ScoreType::Water => "Water",
            ScoreType::Cheese => "Cheese",
        }
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for ScoreType {
    type Error = ValidationError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        ScoreType::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| {
                ValidationError::unbounded(
                    "score_type",
                    code as f64,
                    format!(
                        "Invalid score type: {}. Must be 0 (Food), 1 (Beverage), 2 (Water), or 3 (Cheese)",
                        code
                    ),
                )
            })
    }
}

impl FromStr for ScoreType {
    type Err = ValidationError;

    /// Accepts a case-insensitive name or a numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return ScoreType::try_from(code);
        }
        ScoreType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ValidationError::unbounded(
                    "score_type",
                    f64::NAN,
                    format!(
                        "Invalid score type: '{}'. Must be food, beverage, water, or cheese",
                        trimmed
                    ),
                )
            })
    }
}

/// Letter grade, A (best) through E (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Grade::A => "best nutritional quality",
            Grade::B => "good nutritional quality",
            Grade::C => "average nutritional quality",
            Grade::D => "poor nutritional quality",
            Grade::E => "worst nutritional quality",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one score calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalScore {
    /// Final score; lower is better and may be negative.
    pub value: i32,
    pub grade: Grade,
    /// Positive points used by the category rule.
    pub positive: i32,
    pub negative: i32,
    pub score_type: ScoreType,
}
