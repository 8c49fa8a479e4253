use super::*;
use crate::model::criteria::Polarity;

fn sample(lambda: f64) -> (DecisionMatrix, CriteriaProfile) {
    let m = DecisionMatrix::from_rows(vec![vec![2.0, 4.0], vec![4.0, 1.0]]).unwrap();
    let mut p = CriteriaProfile::from_parts(&["C1", "C2"], &[0.5, 0.5], &[Polarity::Benefit; 2]).unwrap();
    p.lambda = lambda;
    (m, p)
}

#[test]
fn test_combined_score() {
    let (m, p) = sample(0.5);
    let out = waspas(&m, &p).unwrap();
    let w = &out.scores[0].values;
    let q1 = &out.scores[1].values;
    let q2 = &out.scores[2].values;
    assert!((q1[0] - 0.75).abs() < 1e-12);
    assert!((q1[1] - 0.625).abs() < 1e-12);
    assert!((q2[0] - 0.5f64.sqrt()).abs() < 1e-12);
    assert!((q2[1] - 0.5).abs() < 1e-12);
    assert!((w[0] - (0.375 + 0.5 * 0.5f64.sqrt())).abs() < 1e-12);
    assert!((w[1] - 0.5625).abs() < 1e-12);
    assert_eq!(out.ranks, vec![1, 2]);
}

#[test]
fn test_lambda_extremes() {
    let (m, p) = sample(1.0);
    let out = waspas(&m, &p).unwrap();
    assert_eq!(out.scores[0].values, out.scores[1].values);

    let (m, p) = sample(0.0);
    let out = waspas(&m, &p).unwrap();
    assert_eq!(out.scores[0].values, out.scores[2].values);
}

#[test]
fn test_zero_cost_value_maps_to_one() {
    let m = DecisionMatrix::from_rows(vec![vec![0.0], vec![2.0]]).unwrap();
    let p = CriteriaProfile::from_parts(&["C1"], &[1.0], &[Polarity::Cost]).unwrap();
    let out = waspas(&m, &p).unwrap();
    assert!((out.scores[1].values[0] - 1.0).abs() < 1e-12);
    assert_eq!(out.ranks, vec![1, 2]);
}
