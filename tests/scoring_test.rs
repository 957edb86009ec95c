use nutri_grade_rs::models::{Grade, Nutrient, NutritionalData, ScoreType};
use nutri_grade_rs::scoring::{
    calculate, energy_points, fibre_points, fruits_points, grade_for_score, protein_points,
    saturated_fat_points, sodium_points, sugars_points, table_for, NutritionalScorer,
    PointBreakdown, MAX_NEGATIVE_POINTS, MAX_POSITIVE_POINTS,
};
use nutri_grade_rs::ScoreError;

fn make_data(values: [f64; 7]) -> NutritionalData {
    NutritionalData {
        energy: values[0],
        sugars: values[1],
        saturated_fatty_acids: values[2],
        sodium: values[3],
        fruits: values[4],
        fibre: values[5],
        protein: values[6],
    }
}

fn extremes() -> NutritionalData {
    make_data([4000.0, 100.0, 100.0, 10000.0, 100.0, 50.0, 100.0])
}

#[test]
fn test_all_zero_food_grades_b() {
    let score = calculate(NutritionalData::default(), ScoreType::Food).unwrap();
    assert_eq!(score.negative, 0);
    assert_eq!(score.positive, 0);
    assert_eq!(score.value, 0);
    assert_eq!(score.grade, Grade::B);
}

#[test]
fn test_maximum_values_food_grades_e() {
    let score = calculate(extremes(), ScoreType::Food).unwrap();
    assert_eq!(score.negative, 40);
    assert_eq!(score.positive, 15);
    assert_eq!(score.value, 25);
    assert_eq!(score.grade, Grade::E);
}

#[test]
fn test_water_is_always_zero_a() {
    for data in [NutritionalData::default(), extremes()] {
        let score = calculate(data, ScoreType::Water).unwrap();
        assert_eq!(score.value, 0);
        assert_eq!(score.grade, Grade::A);
        assert_eq!(score.positive, 0);
        assert_eq!(score.negative, 0);
        assert_eq!(score.score_type, ScoreType::Water);
    }
}

#[test]
fn test_negative_energy_rejected_for_every_type() {
    let data = make_data([-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    for score_type in ScoreType::ALL {
        match calculate(data, score_type) {
            Err(ScoreError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "energy");
                assert_eq!(errors[0].value, -1.0);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }
}

#[test]
fn test_fruity_beverage_grades_a() {
    let data = make_data([0.0, 0.0, 0.0, 0.0, 81.0, 0.0, 0.0]);
    let score = calculate(data, ScoreType::Beverage).unwrap();
    assert_eq!(score.positive, 5);
    assert_eq!(score.negative, 0);
    assert_eq!(score.value, -5);
    assert_eq!(score.grade, Grade::A);
}

#[test]
fn test_beverage_fruit_only_with_fibre_and_protein_present() {
    // fruit 50% -> 1 point; fibre and protein would add 10 more for food
    let data = make_data([180.0, 10.6, 0.0, 4.0, 50.0, 50.0, 100.0]);
    let beverage = calculate(data, ScoreType::Beverage).unwrap();
    let food = calculate(data, ScoreType::Food).unwrap();

    assert_eq!(beverage.positive, 1);
    assert_eq!(food.positive, 11);
    assert_eq!(beverage.negative, food.negative);
    assert_eq!(beverage.value, beverage.negative - 1);
}

#[test]
fn test_cheese_keeps_protein_points() {
    let data = make_data([1500.0, 0.5, 20.0, 700.0, 0.0, 0.0, 25.0]);
    let score = calculate(data, ScoreType::Cheese).unwrap();
    // energy 4, sugars 0, sat fat 10, sodium 7; protein 5
    assert_eq!(score.negative, 21);
    assert_eq!(score.positive, 5);
    assert_eq!(score.value, 16);
    assert_eq!(score.grade, Grade::D);
}

#[test]
fn test_band_edges_for_every_table() {
    let cases: [(fn(f64) -> u8, &[f64]); 7] = [
        (energy_points, table_for(Nutrient::Energy).bands),
        (sugars_points, table_for(Nutrient::Sugars).bands),
        (saturated_fat_points, table_for(Nutrient::SaturatedFattyAcids).bands),
        (sodium_points, table_for(Nutrient::Sodium).bands),
        (fruits_points, table_for(Nutrient::Fruits).bands),
        (fibre_points, table_for(Nutrient::Fibre).bands),
        (protein_points, table_for(Nutrient::Protein).bands),
    ];

    for (points, bands) in cases {
        for (idx, &upper) in bands.iter().enumerate() {
            assert_eq!(points(upper) as usize, idx, "at bound {}", upper);
            let above = points(upper + 0.01);
            assert!(above as usize > idx, "just above bound {}", upper);
        }
    }
}

#[test]
fn test_totals_stay_in_range() {
    let steps = [0.0, 0.25, 0.5, 0.75, 1.0];
    let max = extremes();
    for &s in &steps {
        for &t in &steps {
            let data = make_data([
                max.energy * s,
                max.sugars * t,
                max.saturated_fatty_acids * s * 0.2,
                max.sodium * t * 0.1,
                max.fruits * s,
                max.fibre * t * 0.2,
                max.protein * s * 0.1,
            ]);
            let points = PointBreakdown::from_data(&data);
            assert!((0..=MAX_NEGATIVE_POINTS).contains(&points.negative_total()));
            assert!((0..=MAX_POSITIVE_POINTS).contains(&points.positive_total()));
        }
    }
}

#[test]
fn test_grade_never_improves_as_score_rises() {
    for s1 in -15..=40 {
        for s2 in s1..=40 {
            assert!(grade_for_score(s1) <= grade_for_score(s2));
        }
    }
}

#[test]
fn test_repeat_calculation_is_identical() {
    let scorer = NutritionalScorer::new();
    let data = make_data([1234.5, 17.2, 3.3, 410.0, 55.0, 2.0, 6.1]);
    for score_type in ScoreType::ALL {
        let first = scorer.calculate(data, score_type).unwrap();
        let second = scorer.calculate(data, score_type).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_shared_scorer_across_threads() {
    let scorer = NutritionalScorer::new();
    let data = make_data([2200.0, 47.0, 18.0, 24.0, 0.0, 7.0, 8.0]);
    let expected = scorer.calculate(data, ScoreType::Food).unwrap();

    let scorer = &scorer;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || scorer.calculate(data, ScoreType::Food).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_out_of_range_code_rejected() {
    let scorer = NutritionalScorer::new();
    let err = scorer
        .calculate_with_code(NutritionalData::default(), 4)
        .unwrap_err();
    let errors = err.validation_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "score_type");
}
