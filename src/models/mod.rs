pub mod nutrition;
pub mod score;
pub mod validation;

pub use nutrition::{Nutrient, NutritionalData};
pub use score::{Grade, NutritionalScore, ScoreType};
pub use validation::{default_bounds, Bounds, ValidationError, ValidationRules};
