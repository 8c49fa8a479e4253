use super::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::report::json::{
    AggregateSummary, InputMeta, MethodStatus, SummaryData, ToolMeta, TopEntry,
    render_summary_json,
};
use crate::report::text::render_report_text;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("mcdm_report_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn entry(rank: u32, key: &str) -> TopEntry {
    TopEntry {
        rank,
        key: key.to_string(),
        name: key.to_lowercase(),
        score: rank as f64,
    }
}

fn summary(winners: [&str; 3]) -> SummaryData {
    SummaryData {
        tool: ToolMeta {
            name: "mcdm-consensus".to_string(),
            version: "0.1.0".to_string(),
        },
        input: InputMeta {
            path: Some("stocks.csv".to_string()),
            format: "csv".to_string(),
            n_alternatives: 3,
            n_criteria: Some(2),
        },
        profile: None,
        methods: vec![
            MethodStatus {
                method: "TOPSIS".to_string(),
                status: "ok".to_string(),
                error: None,
                ideal_point: None,
                top: vec![entry(1, "AAPL"), entry(2, "MSFT")],
            },
            MethodStatus {
                method: "VIKOR".to_string(),
                status: "failed".to_string(),
                error: Some("degenerate data in VIKOR: group utility S has zero range".to_string()),
                ideal_point: None,
                top: Vec::new(),
            },
        ],
        ranking_methods: vec!["TOPSIS".to_string()],
        aggregation: ["Mean Rank", "Borda", "Copeland"]
            .iter()
            .zip(winners)
            .map(|(m, w)| AggregateSummary {
                method: m.to_string(),
                top: vec![entry(1, w)],
            })
            .collect(),
        combined_rows: 3,
    }
}

#[test]
fn test_number_formatting() {
    assert_eq!(format_f64_6(0.5), "0.500000");
    assert_eq!(format_score(3.0), "3");
    assert_eq!(format_score(-4.0), "-4");
    assert_eq!(format_score(1.5), "1.500000");
}

#[test]
fn test_write_table_quotes_fields() {
    let dir = make_temp_dir();
    let path = dir.join("t.csv");
    let header = vec!["Symbol".to_string(), "Shortname".to_string()];
    let rows = vec![vec!["BRK".to_string(), "Berkshire, Inc".to_string()]];
    write_table(&path, TableFormat::Csv, &header, &rows).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Symbol,Shortname\nBRK,\"Berkshire, Inc\"\n"
    );
}

#[test]
fn test_write_table_missing_dir() {
    let dir = make_temp_dir();
    let err = write_table(&dir.join("nope").join("t.csv"), TableFormat::Csv, &[], &[]).unwrap_err();
    assert!(matches!(err, McdmError::Io { .. }));
}

#[test]
fn test_summary_json_omits_empty_error() {
    let json = render_summary_json(&summary(["AAPL", "AAPL", "AAPL"])).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(v["methods"][0].get("error").is_none());
    assert_eq!(v["methods"][1]["status"], "failed");
    assert_eq!(v["aggregation"][2]["method"], "Copeland");
}

#[test]
fn test_report_text_sections() {
    let text = render_report_text(&summary(["AAPL", "AAPL", "AAPL"]));
    assert!(text.contains("1. Input"));
    assert!(text.contains("TOPSIS: #1 AAPL, #2 MSFT"));
    assert!(text.contains("VIKOR: FAILED (degenerate data"));
    assert!(text.contains("3. Consensus rankings"));
    assert!(text.contains("all aggregation methods agree"));

    let split = render_report_text(&summary(["AAPL", "MSFT", "AAPL"]));
    assert!(split.contains("disagree"));
}
