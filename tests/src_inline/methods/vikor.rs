use super::*;
use crate::model::criteria::Polarity;

fn two_benefit(values: Vec<Vec<f64>>) -> (DecisionMatrix, CriteriaProfile) {
    let m = DecisionMatrix::from_rows(values).unwrap();
    let p = CriteriaProfile::from_parts(&["C1", "C2"], &[0.5, 0.5], &[Polarity::Benefit; 2]).unwrap();
    (m, p)
}

#[test]
fn test_q_s_r_values() {
    let (m, p) = two_benefit(vec![vec![1.0, 1.0], vec![2.0, 3.0], vec![3.0, 3.0]]);
    let out = vikor(&m, &p).unwrap();
    let names = out.scores.iter().map(|c| c.name).collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["VIKOR Score (Q)", "Group Utility (S)", "Individual Regret (R)"]
    );
    let q = &out.scores[0].values;
    let s = &out.scores[1].values;
    let r = &out.scores[2].values;
    assert!((s[0] - 1.0 / 3.0).abs() < 1e-12);
    assert!((s[2] - 1.0).abs() < 1e-12);
    assert!((r[1] - 0.5).abs() < 1e-12);
    assert!(q[0].abs() < 1e-12);
    assert!((q[1] - 0.875).abs() < 1e-12);
    assert!((q[2] - 1.0).abs() < 1e-12);
    assert_eq!(out.ranks, vec![1, 2, 3]);
}

#[test]
fn test_higher_is_better_reverses_order() {
    let (m, mut p) = two_benefit(vec![vec![1.0, 1.0], vec![2.0, 3.0], vec![3.0, 3.0]]);
    p.vikor_order = VikorOrder::HigherIsBetter;
    let out = vikor(&m, &p).unwrap();
    assert_eq!(out.ranks, vec![3, 2, 1]);
}

#[test]
fn test_strategy_weight_one_uses_group_utility_only() {
    let (m, mut p) = two_benefit(vec![vec![1.0, 1.0], vec![2.0, 3.0], vec![3.0, 3.0]]);
    p.v = 1.0;
    let out = vikor(&m, &p).unwrap();
    assert!((out.primary_score()[1] - 0.75).abs() < 1e-12);
}

#[test]
fn test_zero_s_range_is_degenerate() {
    let (m, p) = two_benefit(vec![vec![2.0, 4.0], vec![4.0, 2.0], vec![3.0, 3.0]]);
    let err = vikor(&m, &p).unwrap_err();
    match err {
        McdmError::DegenerateData { method, detail } => {
            assert_eq!(method, "VIKOR");
            assert!(detail.contains("group utility"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_zero_r_range_is_degenerate() {
    let (m, p) = two_benefit(vec![vec![1.0, 3.0], vec![3.0, 3.0]]);
    let err = vikor(&m, &p).unwrap_err();
    assert!(err.to_string().contains("individual regret"));
}
