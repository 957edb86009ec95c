use crate::error::{Result, ScoreError};
use crate::models::{NutritionalData, NutritionalScore, ScoreType, ValidationRules};
use crate::scoring::combiner::{self, WATER_RESULT};
use crate::scoring::grade::grade_for_score;
use crate::scoring::points::PointBreakdown;
use crate::scoring::validator::Validator;

/// Scoring facade: validate, compute points, combine, grade.
///
/// Holds only immutable rules, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct NutritionalScorer {
    validator: Validator,
}

impl NutritionalScorer {
    /// Scorer using the default validation ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer using custom validation ranges.
    pub fn with_rules(rules: ValidationRules) -> Result<Self> {
        rules.check().map_err(ScoreError::InvalidRules)?;
        Ok(Self {
            validator: Validator::new(rules),
        })
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Score one nutrient profile.
    pub fn calculate(
        &self,
        data: NutritionalData,
        score_type: ScoreType,
    ) -> Result<NutritionalScore> {
        let errors = self.validator.validate(&data);
        if !errors.is_empty() {
            return Err(ScoreError::Validation(errors));
        }
        Ok(score_validated(&data, score_type))
    }

    /// Score with a raw numeric category code (0 Food, 1 Beverage, 2 Water, 3 Cheese).
    ///
    /// An unknown code is reported in the same error list as the field errors.
    pub fn calculate_with_code(
        &self,
        data: NutritionalData,
        code: i64,
    ) -> Result<NutritionalScore> {
        let mut errors = self.validator.validate(&data);
        match self.validator.validate_score_code(code) {
            Ok(score_type) if errors.is_empty() => Ok(score_validated(&data, score_type)),
            Ok(_) => Err(ScoreError::Validation(errors)),
            Err(e) => {
                errors.push(e);
                Err(ScoreError::Validation(errors))
            }
        }
    }

    /// Per-component points without applying any category rule.
    pub fn breakdown(&self, data: &NutritionalData) -> Result<PointBreakdown> {
        let errors = self.validator.validate(data);
        if !errors.is_empty() {
            return Err(ScoreError::Validation(errors));
        }
        Ok(PointBreakdown::from_data(data))
    }
}

fn score_validated(data: &NutritionalData, score_type: ScoreType) -> NutritionalScore {
    let combined = match score_type {
        ScoreType::Water => WATER_RESULT,
        _ => combiner::combine(score_type, &PointBreakdown::from_data(data)),
    };

    NutritionalScore {
        value: combined.value,
        grade: grade_for_score(combined.value),
        positive: combined.positive,
        negative: combined.negative,
        score_type,
    }
}

/// Score with the default validation ranges.
pub fn calculate(data: NutritionalData, score_type: ScoreType) -> Result<NutritionalScore> {
    NutritionalScorer::new().calculate(data, score_type)
}
