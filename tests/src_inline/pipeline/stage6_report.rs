use super::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::ranking::AggregationKind;
use crate::pipeline::stage5_aggregate::run_stage5;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("mcdm_stage6_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn ranking() -> RankingMatrix {
    RankingMatrix {
        alternatives: vec![
            Alternative::new("A", "Alpha"),
            Alternative::new("B", "Beta, Ltd"),
            Alternative::new("C", "Gamma"),
        ],
        methods: vec!["TOPSIS".to_string(), "ARAS".to_string(), "VIKOR".to_string()],
        ranks: vec![vec![2, 1, 2], vec![1, 2, 1], vec![3, 3, 3]],
    }
}

fn input<'a>(ranking: &'a RankingMatrix, aggregates: &'a Stage5Output) -> Stage6Input<'a> {
    Stage6Input {
        tool_name: "mcdm-consensus".to_string(),
        tool_version: "0.0.0".to_string(),
        input_path: None,
        profile: None,
        methods: None,
        ranking: Some(ranking),
        aggregates: Some(aggregates),
        format: TableFormat::Csv,
    }
}

#[test]
fn test_combined_report_has_one_row_per_alternative() {
    let aggs = run_stage5(&ranking()).unwrap();
    let rows = build_combined_report(&aggs.mean_rank, &aggs.borda, &aggs.copeland);
    assert_eq!(rows.len(), 3);
    let keys = rows.iter().map(|r| r.alternative.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["B", "A", "C"]);
    assert_eq!(rows[0].mean_rank, 1);
    assert_eq!(rows[0].borda_rank, 1);
    assert_eq!(rows[2].copeland_score, -6.0);
}

#[test]
fn test_combined_report_is_inner_join() {
    let aggs = run_stage5(&ranking()).unwrap();
    let mut borda = aggs.borda.clone();
    borda.alternatives.pop();
    borda.scores.pop();
    borda.ranks.pop();
    let rows = build_combined_report(&aggs.mean_rank, &borda, &aggs.copeland);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.alternative.key != "C"));
}

#[test]
fn test_writes_consensus_files() {
    let dir = make_temp_dir();
    let ranking = ranking();
    let aggs = run_stage5(&ranking).unwrap();
    let summary = write_reports(&input(&ranking, &aggs), &dir).unwrap();

    for name in [
        "mcdm_rankings.csv",
        "mean_rank.csv",
        "borda.csv",
        "copeland.csv",
        "aggregated_rankings.csv",
        "summary.json",
        "report.txt",
    ] {
        assert!(dir.join(name).exists(), "{name}");
    }

    let combined = fs::read_to_string(dir.join("aggregated_rankings.csv")).unwrap();
    let mut lines = combined.lines();
    assert_eq!(lines.next().unwrap(), COMBINED_HEADER.join(","));
    assert_eq!(lines.next().unwrap(), "B,\"Beta, Ltd\",1.333333,1,5,1,4,1");
    assert_eq!(combined.lines().count(), 4);

    let borda = fs::read_to_string(dir.join("borda.csv")).unwrap();
    assert!(borda.starts_with("Alternative,Company Name,Borda Score,Final Rank (Borda)\n"));

    let matrix = fs::read_to_string(dir.join("mcdm_rankings.csv")).unwrap();
    assert!(matrix.starts_with("Symbol,Shortname,TOPSIS,ARAS,VIKOR\nA,Alpha,2,1,2\n"));

    assert_eq!(summary.combined_rows, 3);
    assert_eq!(summary.aggregation.len(), 3);
    assert_eq!(summary.aggregation[0].method, AggregationKind::MeanRank.label());
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("summary.json")).unwrap()).unwrap();
    assert_eq!(json["combined_rows"], 3);
    assert_eq!(json["tool"]["name"], "mcdm-consensus");
    assert!(json.get("profile").is_none());
}

#[test]
fn test_method_table_sorted_by_rank() {
    let dir = make_temp_dir();
    let result = MethodResult {
        method: crate::model::ranking::MethodKind::Taxonomy,
        alternatives: vec![Alternative::new("A", "Alpha"), Alternative::new("B", "Beta")],
        scores: vec![crate::model::ranking::ScoreColumn {
            name: "Distance",
            values: vec![0.5, 0.25],
        }],
        ranks: vec![2, 1],
        diagnostics: None,
    };
    let path = dir.join("taxonomy_results.tsv");
    write_method_table(&result, &path, TableFormat::Tsv).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "Symbol\tShortname\tDistance\tRank\nB\tBeta\t0.250000\t1\nA\tAlpha\t0.500000\t2\n"
    );
}
