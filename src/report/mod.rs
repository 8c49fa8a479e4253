pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{McdmError, Result};
use crate::input::table::{TableFormat, quote_field};

/// Entries listed per method in the summary and the text report.
pub const TOP_K: usize = 10;

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Integer-valued scores (pairwise counts) print without decimals.
pub fn format_score(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format_f64_6(v)
    }
}

pub fn write_table(
    path: &Path,
    format: TableFormat,
    header: &[String],
    rows: &[Vec<String>],
) -> Result<()> {
    let io_err = |e| McdmError::io(path, e);
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    let sep = format.delimiter().to_string();

    let line = header
        .iter()
        .map(|h| quote_field(h, format))
        .collect::<Vec<_>>()
        .join(&sep);
    writeln!(w, "{}", line).map_err(io_err)?;
    for row in rows {
        let line = row
            .iter()
            .map(|v| quote_field(v, format))
            .collect::<Vec<_>>()
            .join(&sep);
        writeln!(w, "{}", line).map_err(io_err)?;
    }
    w.flush().map_err(io_err)
}

pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| McdmError::io(path, e))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
