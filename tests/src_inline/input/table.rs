use super::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("mcdm_table_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_format_from_path() {
    assert_eq!(TableFormat::from_path(Path::new("a.csv")), TableFormat::Csv);
    assert_eq!(TableFormat::from_path(Path::new("a.TSV")), TableFormat::Tsv);
    assert_eq!(TableFormat::from_path(Path::new("a.txt.gz")), TableFormat::Tsv);
    assert_eq!(TableFormat::from_path(Path::new("a.csv.gz")), TableFormat::Csv);
    assert_eq!(TableFormat::from_path(Path::new("noext")), TableFormat::Csv);
}

#[test]
fn test_split_record_quotes() {
    let fields = split_record(r#"AAPL,"Apple, Inc.","say ""hi""", 3.5 "#, ',').unwrap();
    assert_eq!(fields, vec!["AAPL", "Apple, Inc.", "say \"hi\"", "3.5"]);
    assert_eq!(split_record("a\t\tb", '\t').unwrap(), vec!["a", "", "b"]);
    assert!(split_record("\"open", ',').is_err());
}

#[test]
fn test_quote_field() {
    assert_eq!(quote_field("plain", TableFormat::Csv), "plain");
    assert_eq!(quote_field("a,b", TableFormat::Csv), "\"a,b\"");
    assert_eq!(quote_field("a,b", TableFormat::Tsv), "a,b");
    assert_eq!(quote_field("x\"y", TableFormat::Tsv), "\"x\"\"y\"");
}

#[test]
fn test_read_table_skips_blank_lines_and_bom() {
    let dir = make_temp_dir();
    let path = dir.join("m.csv");
    fs::write(&path, "\u{feff}Symbol,Value\r\n\r\nA,1\nB,2\n").unwrap();
    let table = read_table(&path).unwrap();
    assert_eq!(table.header, vec!["Symbol", "Value"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].line, 3);
    assert_eq!(table.column_index("symbol"), Some(0));
    assert_eq!(table.column_index("missing"), None);
}

#[test]
fn test_read_gzipped_tsv() {
    let dir = make_temp_dir();
    let path = dir.join("m.tsv.gz");
    let mut enc = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    enc.write_all(b"Symbol\tValue\nA\t1.5\n").unwrap();
    enc.finish().unwrap();
    let table = read_table(&path).unwrap();
    assert_eq!(table.rows[0].fields, vec!["A", "1.5"]);
}

#[test]
fn test_read_table_errors() {
    let dir = make_temp_dir();
    let empty = dir.join("empty.csv");
    fs::write(&empty, "\n\n").unwrap();
    assert!(matches!(read_table(&empty), Err(McdmError::Parse { .. })));

    let broken = dir.join("broken.csv");
    fs::write(&broken, "Symbol,Name\nA,\"unterminated\n").unwrap();
    match read_table(&broken) {
        Err(McdmError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("unexpected result {other:?}"),
    }

    assert!(matches!(
        read_table(&dir.join("nope.csv")),
        Err(McdmError::Io { .. })
    ));
}
