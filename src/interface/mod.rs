pub mod render;

pub use render::{
    display_comparison, display_rules, display_score, display_thresholds,
    display_validation_errors, format_score_line,
};
