use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::{NutritionalData, ScoreType};

/// NutriGrade: score foods and beverages from per-100g nutrient values.
#[derive(Parser, Debug)]
#[command(name = "nutri-grade")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON file overriding the per-nutrient validation ranges.
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a single item.
    Score(ScoreArgs),

    /// Score every row of a CSV file and rank them best to worst.
    Compare {
        /// CSV with header: name,type,energy,sugars,saturated_fatty_acids,sodium,fruits,fibre,protein
        file: PathBuf,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the score boundaries for each grade.
    Grades,

    /// Show the effective validation ranges.
    Rules {
        /// Write the ranges as a JSON template instead of printing them.
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

/// Nutrient values per 100g (or 100ml) plus the item category.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Energy in kJ.
    #[arg(long, allow_negative_numbers = true)]
    pub energy: f64,

    /// Sugars in g.
    #[arg(long, allow_negative_numbers = true)]
    pub sugars: f64,

    /// Saturated fatty acids in g.
    #[arg(long = "saturated-fat", allow_negative_numbers = true)]
    pub saturated_fat: f64,

    /// Sodium in mg.
    #[arg(long, allow_negative_numbers = true)]
    pub sodium: f64,

    /// Fruit/vegetable/nut content in %.
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub fruits: f64,

    /// Fibre in g.
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub fibre: f64,

    /// Protein in g.
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub protein: f64,

    /// Item category.
    #[arg(long = "type", value_enum, default_value_t = CategoryArg::Food)]
    pub category: CategoryArg,

    /// Show per-nutrient points.
    #[arg(long)]
    pub breakdown: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ScoreArgs {
    pub fn data(&self) -> NutritionalData {
        NutritionalData {
            energy: self.energy,
            sugars: self.sugars,
            saturated_fatty_acids: self.saturated_fat,
            sodium: self.sodium,
            fruits: self.fruits,
            fibre: self.fibre,
            protein: self.protein,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryArg {
    Food,
    Beverage,
    Water,
    Cheese,
}

impl From<CategoryArg> for ScoreType {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Food => ScoreType::Food,
            CategoryArg::Beverage => ScoreType::Beverage,
            CategoryArg::Water => ScoreType::Water,
            CategoryArg::Cheese => ScoreType::Cheese,
        }
    }
}
