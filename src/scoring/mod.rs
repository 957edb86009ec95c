pub mod combiner;
pub mod constants;
pub mod engine;
pub mod grade;
pub mod points;
pub mod validator;

pub use combiner::{combine, Combined};
pub use constants::*;
pub use engine::{calculate, NutritionalScorer};
pub use grade::{grade_for_score, grade_thresholds};
pub use points::{
    energy_points, fibre_points, fruits_points, points_for, protein_points, saturated_fat_points,
    sodium_points, sugars_points, table_for, table_max_points, PointBreakdown,
};
pub use validator::Validator;
