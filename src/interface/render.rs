use crate::compare::Comparison;
use crate::models::{
    Grade, Nutrient, NutritionalData, NutritionalScore, ScoreType, ValidationError,
    ValidationRules,
};
use crate::scoring::{grade_thresholds, table_max_points, PointBreakdown};

/// One-line summary of a score, e.g. `Grade B (score 1) | negative 3, positive 2 | Food`.
pub fn format_score_line(score: &NutritionalScore) -> String {
    format!(
        "Grade {} (score {}) | negative {}, positive {} | {}",
        score.grade, score.value, score.negative, score.positive, score.score_type
    )
}

/// Display a score with an optional per-nutrient breakdown.
pub fn display_score(
    score: &NutritionalScore,
    data: &NutritionalData,
    breakdown: Option<&PointBreakdown>,
) {
    println!();
    println!("=== Nutritional Score ===");
    println!();
    println!("{}", format_score_line(score));
    println!("  {}", score.grade.description());

    if score.score_type == ScoreType::Water {
        println!("  Water is always graded A; nutrient tables are not applied.");
    }

    if let Some(points) = breakdown {
        println!();
        println!("--- Breakdown ---");
        for nutrient in Nutrient::ALL {
            let excluded = score.score_type == ScoreType::Beverage
                && matches!(nutrient, Nutrient::Fibre | Nutrient::Protein);
            let note = if excluded { "  (not counted for beverages)" } else { "" };
            println!(
                "  {} {:<22} {:>8.1} {:<12} {:>2}/{}{}",
                if nutrient.is_negative() { "-" } else { "+" },
                nutrient.field_name(),
                data.value(nutrient),
                nutrient.unit(),
                points.get(nutrient),
                table_max_points(nutrient),
                note
            );
        }
    }
    println!();
}

/// Display every validation error, one per line.
pub fn display_validation_errors(errors: &[ValidationError]) {
    eprintln!("Input rejected ({} problem(s)):", errors.len());
    for error in errors {
        match (error.min, error.max) {
            (Some(min), Some(max)) => eprintln!(
                "  - {}: {} (got {}, allowed {}..={})",
                error.field, error.message, error.value, min, max
            ),
            _ => eprintln!("  - {}: {}", error.field, error.message),
        }
    }
}

/// Display the grade boundaries.
pub fn display_thresholds() {
    println!();
    println!("=== Grade Thresholds ===");
    println!();

    let mut lower: Option<i32> = None;
    for (grade, upper) in grade_thresholds() {
        let range = match (lower, upper) {
            (None, Some(u)) => format!("score <= {}", u),
            (Some(l), Some(u)) => format!("{} <= score <= {}", l + 1, u),
            (Some(l), None) => format!("score >= {}", l + 1),
            (None, None) => "any score".to_string(),
        };
        println!("  {}  {:<18} {}", grade, range, grade.description());
        lower = upper;
    }
    println!();
}

/// Display the effective validation ranges.
pub fn display_rules(rules: &ValidationRules) {
    println!();
    println!("=== Validation Ranges ===");
    println!();
    for (nutrient, bounds) in rules.iter() {
        println!(
            "  {:<22} {:>8} ..= {:<8} {}",
            nutrient.field_name(),
            bounds.min,
            bounds.max,
            nutrient.unit()
        );
    }
    println!();
}

/// Width of the name column, in characters.
fn name_column_width(comparison: &Comparison) -> usize {
    comparison
        .ranked
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(10)
}

/// Display a ranked comparison, best first.
pub fn display_comparison(comparison: &Comparison) {
    if comparison.ranked.is_empty() && comparison.rejected.is_empty() {
        println!("No rows to compare.");
        return;
    }

    println!();
    println!("=== Ranking ===");
    println!();

    let max_name_len = name_column_width(comparison);

    for (i, item) in comparison.ranked.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {}  {:>4}  (-{} +{})  {}",
            i + 1,
            item.name,
            item.score.grade,
            item.score.value,
            item.score.negative,
            item.score.positive,
            item.score.score_type,
            width = max_name_len
        );
    }

    if !comparison.rejected.is_empty() {
        println!();
        println!("--- Rejected rows ---");
        for row in &comparison.rejected {
            let reasons: Vec<String> = row.errors.iter().map(|e| e.to_string()).collect();
            println!("  line {} '{}': {}", row.line, row.name, reasons.join("; "));
        }
    }

    println!();
    println!("--- Summary ---");
    println!("{}", comparison.summary());
    let counts = comparison.grade_counts();
    let by_grade: Vec<String> = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E]
        .iter()
        .map(|g| format!("{}:{}", g, counts.get(g).copied().unwrap_or(0)))
        .collect();
    println!("Grades: {}", by_grade.join(" "));
    println!();
}
