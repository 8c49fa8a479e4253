use super::*;

#[test]
fn test_relative_significance() {
    let m = DecisionMatrix::from_rows(vec![vec![1.0, 1.0], vec![3.0, 1.0]]).unwrap();
    let p = CriteriaProfile::from_parts(
        &["C1", "C2"],
        &[0.5, 0.5],
        &[Polarity::Benefit, Polarity::Cost],
    )
    .unwrap();
    let out = copras(&m, &p).unwrap();
    let q = out.primary_score();
    assert!((q[0] + 100.0).abs() < 1e-9);
    assert!((q[1] - 100.0).abs() < 1e-9);
    assert_eq!(out.ranks, vec![2, 1]);
    assert_eq!(out.scores[0].name, "Utility Score (Q)");
}

#[test]
fn test_best_alternative_scores_hundred() {
    let m = DecisionMatrix::from_rows(vec![vec![2.0, 3.0], vec![5.0, 1.0], vec![4.0, 4.0]]).unwrap();
    let p = CriteriaProfile::from_parts(&["C1", "C2"], &[0.6, 0.4], &[Polarity::Benefit; 2]).unwrap();
    let out = copras(&m, &p).unwrap();
    let best = out.ranks.iter().position(|&r| r == 1).unwrap();
    assert!((out.primary_score()[best] - 100.0).abs() < 1e-9);
}

#[test]
fn test_zero_column_sum_is_degenerate() {
    let m = DecisionMatrix::from_rows(vec![vec![1.0, 0.0], vec![2.0, 0.0]]).unwrap();
    let p = CriteriaProfile::from_parts(&["C1", "C2"], &[0.5, 0.5], &[Polarity::Benefit; 2]).unwrap();
    assert!(matches!(
        copras(&m, &p),
        Err(McdmError::DegenerateData { .. })
    ));
}

#[test]
fn test_zero_max_significance_is_degenerate() {
    let m = DecisionMatrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
    let p = CriteriaProfile::from_parts(
        &["C1", "C2"],
        &[0.5, 0.5],
        &[Polarity::Benefit, Polarity::Cost],
    )
    .unwrap();
    let err = copras(&m, &p).unwrap_err();
    assert!(err.to_string().contains("relative significance"));
}
