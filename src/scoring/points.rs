use serde::{Deserialize, Serialize};

use crate::models::{Nutrient, NutritionalData};
use crate::scoring::constants::*;

/// Map a value onto a threshold table.
pub fn points_for(value: f64, table: &PointTable) -> u8 {
    table
        .bands
        .iter()
        .position(|&upper| value <= upper)
        .map(|idx| idx as u8)
        .unwrap_or(table.max_points)
}

pub fn energy_points(kj: f64) -> u8 {
    points_for(kj, &ENERGY_TABLE)
}

pub fn sugars_points(grams: f64) -> u8 {
    points_for(grams, &SUGARS_TABLE)
}

pub fn saturated_fat_points(grams: f64) -> u8 {
    points_for(grams, &SATURATED_FAT_TABLE)
}

pub fn sodium_points(mg: f64) -> u8 {
    points_for(mg, &SODIUM_TABLE)
}

pub fn fruits_points(percent: f64) -> u8 {
    points_for(percent, &FRUITS_TABLE)
}

pub fn fibre_points(grams: f64) -> u8 {
    points_for(grams, &FIBRE_TABLE)
}

pub fn protein_points(grams: f64) -> u8 {
    points_for(grams, &PROTEIN_TABLE)
}

/// Table used for a given nutrient.
pub fn table_for(nutrient: Nutrient) -> &'static PointTable {
    match nutrient {
        Nutrient::Energy => &ENERGY_TABLE,
        Nutrient::Sugars => &SUGARS_TABLE,
        Nutrient::SaturatedFattyAcids => &SATURATED_FAT_TABLE,
        Nutrient::Sodium => &SODIUM_TABLE,
        Nutrient::Fruits => &FRUITS_TABLE,
        Nutrient::Fibre => &FIBRE_TABLE,
        Nutrient::Protein => &PROTEIN_TABLE,
    }
}

/// Highest point count a nutrient can earn.
pub fn table_max_points(nutrient: Nutrient) -> u8 {
    table_for(nutrient).max_points
}

/// Per-component points for one nutrient profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointBreakdown {
    pub energy: u8,
    pub sugars: u8,
    pub saturated_fatty_acids: u8,
    pub sodium: u8,
    pub fruits: u8,
    pub fibre: u8,
    pub protein: u8,
}

impl PointBreakdown {
    /// Evaluate all seven tables.
    pub fn from_data(data: &NutritionalData) -> Self {
        Self {
            energy: energy_points(data.energy),
            sugars: sugars_points(data.sugars),
            saturated_fatty_acids: saturated_fat_points(data.saturated_fatty_acids),
            sodium: sodium_points(data.sodium),
            fruits: fruits_points(data.fruits),
            fibre: fibre_points(data.fibre),
            protein: protein_points(data.protein),
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> u8 {
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

    /// Sum of energy, sugars, saturated fat and sodium points.
    pub fn negative_total(&self) -> i32 {
        [self.energy, self.sugars, self.saturated_fatty_acids, self.sodium]
            .iter()
            .map(|&p| i32::from(p))
            .sum()
    }

    /// Sum of fruit, fibre and protein points.
    pub fn positive_total(&self) -> i32 {
        [self.fruits, self.fibre, self.protein]
            .iter()
            .map(|&p| i32::from(p))
            .sum()
    }
}
