use crate::models::Grade;
use crate::scoring::constants::GRADE_BOUNDARIES;

/// Map a final score to its letter grade. Lower scores are better.
pub fn grade_for_score(score: i32) -> Grade {
    GRADE_BOUNDARIES
        .iter()
        .find(|(_, upper)| score <= *upper)
        .map(|(grade, _)| *grade)
        .unwrap_or(Grade::E)
}

/// Inclusive upper bound for each grade; E is open-ended.
pub fn grade_thresholds() -> Vec<(Grade, Option<i32>)> {
    GRADE_BOUNDARIES
        .iter()
        .map(|(grade, upper)| (*grade, Some(*upper)))
        .chain(std::iter::once((Grade::E, None)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_edges() {
        assert_eq!(grade_for_score(-15), Grade::A);
        assert_eq!(grade_for_score(-1), Grade::A);
        assert_eq!(grade_for_score(0), Grade::B);
        assert_eq!(grade_for_score(2), Grade::B);
        assert_eq!(grade_for_score(3), Grade::C);
        assert_eq!(grade_for_score(10), Grade::C);
        assert_eq!(grade_for_score(11), Grade::D);
        assert_eq!(grade_for_score(18), Grade::D);
        assert_eq!(grade_for_score(19), Grade::E);
        assert_eq!(grade_for_score(40), Grade::E);
    }

    #[test]
    fn test_grade_monotonic() {
        let mut previous = grade_for_score(-15);
        for score in -14..=40 {
            let grade = grade_for_score(score);
            assert!(grade >= previous, "grade regressed at score {}", score);
            previous = grade;
        }
    }

    #[test]
    fn test_thresholds_listing() {
        let thresholds = grade_thresholds();
        assert_eq!(thresholds.len(), 5);
        assert_eq!(thresholds[0], (Grade::A, Some(-1)));
        assert_eq!(thresholds[3], (Grade::D, Some(18)));
        assert_eq!(thresholds[4], (Grade::E, None));
    }
}
