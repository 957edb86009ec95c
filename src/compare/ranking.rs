use std::collections::BTreeMap;

use serde::Serialize;

use crate::compare::batch::{BatchFile, BatchRow, RejectedRow};
use crate::models::{Grade, NutritionalData, NutritionalScore, ValidationError};
use crate::scoring::NutritionalScorer;

/// A successfully scored item.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredFood {
    pub name: String,
    pub data: NutritionalData,
    pub score: NutritionalScore,
}

/// Ranked results of scoring a batch, best first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Comparison {
    pub ranked: Vec<ScoredFood>,
    pub rejected: Vec<RejectedRow>,
}

impl Comparison {
    /// Item with the lowest score.
    pub fn best(&self) -> Option<&ScoredFood> {
        self.ranked.first()
    }

    /// Item with the highest score.
    pub fn worst(&self) -> Option<&ScoredFood> {
        self.ranked.last()
    }

    /// Number of ranked items per grade.
    pub fn grade_counts(&self) -> BTreeMap<Grade, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.ranked {
            *counts.entry(item.score.grade).or_insert(0) += 1;
        }
        counts
    }

    /// One-line summary of the comparison.
    pub fn summary(&self) -> String {
        match (self.best(), self.worst()) {
            (Some(best), Some(worst)) if self.ranked.len() > 1 => format!(
                "Compared {} items: best is {} ({}, grade {}), worst is {} ({}, grade {})",
                self.ranked.len(),
                best.name,
                best.score.value,
                best.score.grade,
                worst.name,
                worst.score.value,
                worst.score.grade
            ),
            (Some(only), _) => format!(
                "Scored 1 item: {} ({}, grade {})",
                only.name, only.score.value, only.score.grade
            ),
            _ => "No items could be scored".to_string(),
        }
    }
}

/// Score every row and rank the valid ones by ascending score, then name.
pub fn compare(scorer: &NutritionalScorer, rows: &[BatchRow]) -> Comparison {
    let mut comparison = Comparison::default();

    for row in rows {
        let line = row.line;
        match score_row(scorer, row) {
            Ok(score) => comparison.ranked.push(ScoredFood {
                name: row.name.clone(),
                data: row.data(),
                score,
            }),
            Err(errors) => {
                tracing::warn!(
                    "Skipping '{}' on line {}: {} error(s)",
                    row.name,
                    line,
                    errors.len()
                );
                comparison.rejected.push(RejectedRow {
                    line,
                    name: row.name.clone(),
                    errors,
                });
            }
        }
    }

    rank(&mut comparison.ranked);
    comparison
}

/// Score a parsed file; records that could not be read join the rejected rows.
pub fn compare_batch(scorer: &NutritionalScorer, batch: &BatchFile) -> Comparison {
    let mut comparison = compare(scorer, &batch.rows);

    for row in &batch.malformed {
        tracing::warn!(
            "Skipping malformed line {}: {} error(s)",
            row.line,
            row.errors.len()
        );
    }
    comparison.rejected.extend(batch.malformed.iter().cloned());
    comparison.rejected.sort_by_key(|r| r.line);
    comparison
}

/// Sort best to worst; ties broken by case-insensitive name.
pub fn rank(items: &mut [ScoredFood]) {
    items.sort_by(|a, b| {
        a.score
            .value
            .cmp(&b.score.value)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

fn score_row(
    scorer: &NutritionalScorer,
    row: &BatchRow,
) -> std::result::Result<NutritionalScore, Vec<ValidationError>> {
    let data = row.data();
    match row.parse_score_type() {
        Ok(score_type) => scorer
            .calculate(data, score_type)
            .map_err(|e| e.validation_errors().to_vec()),
        Err(type_error) => {
            let mut errors = scorer.validator().validate(&data);
            errors.push(type_error);
            Err(errors)
        }
    }
}
