use crate::models::Grade;

/// Ordered inclusive upper bounds for one nutrient.
///
/// A value at or below `bands[i]` earns `i` points; a value above every
/// bound earns `max_points`.
#[derive(Debug, Clone, Copy)]
pub struct PointTable {
    pub bands: &'static [f64],
    pub max_points: u8,
}

// ─────────────────────────────────────────────────────────────────────────────
// Negative tables (nutrients to limit), 0..=10 points each
// ─────────────────────────────────────────────────────────────────────────────

/// Energy in kJ per 100g.
pub const ENERGY_TABLE: PointTable = PointTable {
    bands: &[
        335.0, 670.0, 1005.0, 1340.0, 1675.0, 2010.0, 2345.0, 2680.0, 3015.0, 3350.0,
    ],
    max_points: 10,
};

/// Sugars in g per 100g.
pub const SUGARS_TABLE: PointTable = PointTable {
    bands: &[4.5, 9.0, 13.5, 18.0, 22.5, 27.0, 31.0, 36.0, 40.0, 45.0],
    max_points: 10,
};

/// Saturated fatty acids in g per 100g.
pub const SATURATED_FAT_TABLE: PointTable = PointTable {
    bands: &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
    max_points: 10,
};

/// Sodium in mg per 100g.
pub const SODIUM_TABLE: PointTable = PointTable {
    bands: &[
        90.0, 180.0, 270.0, 360.0, 450.0, 540.0, 630.0, 720.0, 810.0, 900.0,
    ],
    max_points: 10,
};

// ─────────────────────────────────────────────────────────────────────────────
// Positive tables (nutrients to encourage), 0..=5 points each
// ─────────────────────────────────────────────────────────────────────────────

/// Fruit/vegetable/nut percentage. Jumps from 2 straight to 5.
pub const FRUITS_TABLE: PointTable = PointTable {
    bands: &[40.0, 60.0, 80.0],
    max_points: 5,
};

/// Fibre in g per 100g.
pub const FIBRE_TABLE: PointTable = PointTable {
    bands: &[0.9, 1.9, 2.8, 3.7, 4.7],
    max_points: 5,
};

/// Protein in g per 100g.
pub const PROTEIN_TABLE: PointTable = PointTable {
    bands: &[1.6, 3.2, 4.8, 6.4, 8.0],
    max_points: 5,
};

pub const MAX_NEGATIVE_POINTS: i32 = 40;
pub const MAX_POSITIVE_POINTS: i32 = 15;

/// Cap on the fruit contribution for beverages.
pub const BEVERAGE_FRUIT_CAP: u8 = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Grade boundaries (upper edge inclusive; E has no upper bound)
// ─────────────────────────────────────────────────────────────────────────────

pub const GRADE_BOUNDARIES: [(Grade, i32); 4] =
    [(Grade::A, -1), (Grade::B, 2), (Grade::C, 10), (Grade::D, 18)];
