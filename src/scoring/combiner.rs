use crate::models::ScoreType;
use crate::scoring::constants::BEVERAGE_FRUIT_CAP;
use crate::scoring::points::PointBreakdown;

/// Outcome of applying a category rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combined {
    pub value: i32,
    pub negative: i32,
    /// Positive points actually used by the rule.
    pub positive: i32,
}

/// Fixed result for water; no table is consulted.
pub const WATER_RESULT: Combined = Combined {
    value: 0,
    negative: 0,
    positive: 0,
};

/// Apply the category rule for `score_type`.
pub fn combine(score_type: ScoreType, points: &PointBreakdown) -> Combined {
    match score_type {
        ScoreType::Food => combine_food(points),
        ScoreType::Beverage => combine_beverage(points),
        ScoreType::Water => WATER_RESULT,
        ScoreType::Cheese => combine_cheese(points),
    }
}

/// negative - positive, unmodified.
pub fn combine_food(points: &PointBreakdown) -> Combined {
    let negative = points.negative_total();
    let positive = points.positive_total();
    Combined {
        value: negative - positive,
        negative,
        positive,
    }
}

/// Protein always counts for cheese.
pub fn combine_cheese(points: &PointBreakdown) -> Combined {
    let negative = points.negative_total();
    let positive = points.positive_total();
    Combined {
        value: negative - positive,
        negative,
        positive,
    }
}

/// Only the fruit component counts; fibre and protein are ignored.
pub fn combine_beverage(points: &PointBreakdown) -> Combined {
    let negative = points.negative_total();
    let positive = i32::from(points.fruits.min(BEVERAGE_FRUIT_CAP));
    Combined {
        value: negative - positive,
        negative,
        positive,
    }
}
