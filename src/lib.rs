pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod scoring;

pub use error::{Result, ScoreError};
pub use models::{Grade, NutritionalData, NutritionalScore, ScoreType};
pub use scoring::{calculate, NutritionalScorer};
