use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{McdmError, Result};
use crate::input::decision::{KEY_COLUMN, NAME_COLUMN};
use crate::input::results::RANK_COLUMN;
use crate::input::table::TableFormat;
use crate::model::criteria::CriteriaProfile;
use crate::model::matrix::Alternative;
use crate::model::ranking::{AggregateResult, MethodResult, RankingMatrix, rank_order};
use crate::pipeline::stage3_methods::Stage3Output;
use crate::pipeline::stage5_aggregate::Stage5Output;
use crate::report::json::{
    AggregateSummary, InputMeta, MethodStatus, SummaryData, ToolMeta, TopEntry,
    render_summary_json,
};
use crate::report::text::render_report_text;
use crate::report::{TOP_K, format_f64_6, format_score, write_table, write_text};

pub const COMBINED_HEADER: [&str; 8] = [
    "Alternative",
    "Company Name",
    "Mean Rank Score",
    "Rank (Mean Rank)",
    "Borda Count Score",
    "Rank (Borda)",
    "Copeland Score",
    "Rank (Copeland)",
];

#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRow {
    pub alternative: Alternative,
    pub mean_rank_score: f64,
    pub mean_rank: u32,
    pub borda_score: f64,
    pub borda_rank: u32,
    pub copeland_score: f64,
    pub copeland_rank: u32,
}

/// Inner join of the three consensus results by alternative key, ordered by mean-rank rank.
pub fn build_combined_report(
    mean_rank: &AggregateResult,
    borda: &AggregateResult,
    copeland: &AggregateResult,
) -> Vec<CombinedRow> {
    let index = |agg: &AggregateResult| -> HashMap<String, (f64, u32)> {
        agg.alternatives
            .iter()
            .zip(agg.scores.iter().zip(&agg.ranks))
            .map(|(a, (&s, &r))| (a.key.clone(), (s, r)))
            .collect()
    };
    let borda_by_key = index(borda);
    let copeland_by_key = index(copeland);

    let mut rows = Vec::with_capacity(mean_rank.alternatives.len());
    for (i, alt) in mean_rank.alternatives.iter().enumerate() {
        let (Some(&(b_score, b_rank)), Some(&(c_score, c_rank))) = (
            borda_by_key.get(&alt.key),
            copeland_by_key.get(&alt.key),
        ) else {
            warn!("dropping {} from the combined report: missing from an aggregation", alt.key);
            continue;
        };
        rows.push(CombinedRow {
            alternative: alt.clone(),
            mean_rank_score: mean_rank.scores[i],
            mean_rank: mean_rank.ranks[i],
            borda_score: b_score,
            borda_rank: b_rank,
            copeland_score: c_score,
            copeland_rank: c_rank,
        });
    }

    let mean_keys = mean_rank
        .alternatives
        .iter()
        .map(|a| a.key.as_str())
        .collect::<std::collections::HashSet<_>>();
    for agg in [borda, copeland] {
        for alt in &agg.alternatives {
            if !mean_keys.contains(alt.key.as_str()) {
                warn!(
                    "dropping {} from the combined report: missing from {}",
                    alt.key,
                    mean_rank.kind.label()
                );
            }
        }
    }

    rows.sort_by_key(|r| r.mean_rank);
    rows
}

#[derive(Debug, Clone)]
pub struct Stage6Input<'a> {
    pub tool_name: String,
    pub tool_version: String,
    pub input_path: Option<String>,
    pub profile: Option<&'a CriteriaProfile>,
    pub methods: Option<&'a Stage3Output>,
    pub ranking: Option<&'a RankingMatrix>,
    pub aggregates: Option<&'a Stage5Output>,
    pub format: TableFormat,
}

pub fn write_reports(input: &Stage6Input<'_>, out_dir: &Path) -> Result<SummaryData> {
    fs::create_dir_all(out_dir).map_err(|e| McdmError::io(out_dir, e))?;
    let ext = input.format.extension();

    if let Some(stage3) = input.methods {
        for result in &stage3.results {
            let path = out_dir.join(format!("{}_results.{ext}", result.method.slug()));
            write_method_table(result, &path, input.format)?;
        }
    }

    if let Some(ranking) = input.ranking {
        write_ranking_matrix(ranking, &out_dir.join(format!("mcdm_rankings.{ext}")), input.format)?;
    }

    let mut combined_rows = 0usize;
    if let Some(aggs) = input.aggregates {
        for agg in aggs.all() {
            let path = out_dir.join(format!("{}.{ext}", agg.kind.slug()));
            write_aggregate_table(agg, &path, input.format)?;
        }
        let combined = build_combined_report(&aggs.mean_rank, &aggs.borda, &aggs.copeland);
        combined_rows = combined.len();
        write_combined_report(
            &combined,
            &out_dir.join(format!("aggregated_rankings.{ext}")),
            input.format,
        )?;
    }

    let summary = build_summary(input, combined_rows);
    write_text(&out_dir.join("summary.json"), &render_summary_json(&summary)?)?;
    write_text(&out_dir.join("report.txt"), &render_report_text(&summary))?;

    info!("wrote reports to {}", out_dir.display());
    Ok(summary)
}

fn identity(alt: &Alternative) -> [String; 2] {
    [alt.key.clone(), alt.name.clone()]
}

pub fn write_method_table(result: &MethodResult, path: &Path, format: TableFormat) -> Result<()> {
    let mut header = vec![KEY_COLUMN.to_string(), NAME_COLUMN.to_string()];
    header.extend(result.scores.iter().map(|c| c.name.to_string()));
    header.push(RANK_COLUMN.to_string());

    let rows = rank_order(&result.ranks)
        .into_iter()
        .map(|i| {
            let mut row = identity(&result.alternatives[i]).to_vec();
            row.extend(result.scores.iter().map(|c| format_f64_6(c.values[i])));
            row.push(result.ranks[i].to_string());
            row
        })
        .collect::<Vec<_>>();
    write_table(path, format, &header, &rows)
}

pub fn write_ranking_matrix(matrix: &RankingMatrix, path: &Path, format: TableFormat) -> Result<()> {
    let mut header = vec![KEY_COLUMN.to_string(), NAME_COLUMN.to_string()];
    header.extend(matrix.methods.iter().cloned());

    let rows = matrix
        .alternatives
        .iter()
        .zip(&matrix.ranks)
        .map(|(alt, ranks)| {
            let mut row = identity(alt).to_vec();
            row.extend(ranks.iter().map(|r| r.to_string()));
            row
        })
        .collect::<Vec<_>>();
    write_table(path, format, &header, &rows)
}

pub fn write_aggregate_table(agg: &AggregateResult, path: &Path, format: TableFormat) -> Result<()> {
    let header = [
        "Alternative".to_string(),
        "Company Name".to_string(),
        agg.kind.score_column().to_string(),
        format!("Final Rank ({})", agg.kind.label()),
    ];
    let rows = rank_order(&agg.ranks)
        .into_iter()
        .map(|i| {
            let mut row = identity(&agg.alternatives[i]).to_vec();
            row.push(format_score(agg.scores[i]));
            row.push(agg.ranks[i].to_string());
            row
        })
        .collect::<Vec<_>>();
    write_table(path, format, &header, &rows)
}

pub fn write_combined_report(rows: &[CombinedRow], path: &Path, format: TableFormat) -> Result<()> {
    let header = COMBINED_HEADER.map(str::to_string);
    let rows = rows
        .iter()
        .map(|r| {
            let mut row = identity(&r.alternative).to_vec();
            row.extend([
                format_score(r.mean_rank_score),
                r.mean_rank.to_string(),
                format_score(r.borda_score),
                r.borda_rank.to_string(),
                format_score(r.copeland_score),
                r.copeland_rank.to_string(),
            ]);
            row
        })
        .collect::<Vec<_>>();
    write_table(path, format, &header, &rows)
}

fn top_entries(alternatives: &[Alternative], scores: &[f64], ranks: &[u32]) -> Vec<TopEntry> {
    rank_order(ranks)
        .into_iter()
        .take(TOP_K)
        .map(|i| TopEntry {
            rank: ranks[i],
            key: alternatives[i].key.clone(),
            name: alternatives[i].name.clone(),
            score: scores[i],
        })
        .collect()
}

fn build_summary(input: &Stage6Input<'_>, combined_rows: usize) -> SummaryData {
    let mut methods = Vec::new();
    if let Some(stage3) = input.methods {
        for r in &stage3.results {
            methods.push(MethodStatus {
                method: r.method.label().to_string(),
                status: "ok".to_string(),
                error: None,
                ideal_point: r.diagnostics.as_ref().map(|d| d.ideal_point.clone()),
                top: top_entries(&r.alternatives, r.primary_score(), &r.ranks),
            });
        }
        for f in &stage3.failures {
            methods.push(MethodStatus {
                method: f.method.label().to_string(),
                status: "failed".to_string(),
                error: Some(f.error.to_string()),
                ideal_point: None,
                top: Vec::new(),
            });
        }
    }

    let aggregation = input
        .aggregates
        .map(|aggs| {
            aggs.all()
                .iter()
                .map(|a| AggregateSummary {
                    method: a.kind.label().to_string(),
                    top: top_entries(&a.alternatives, &a.scores, &a.ranks),
                })
                .collect()
        })
        .unwrap_or_default();

    let n_alternatives = input
        .ranking
        .map(|r| r.n_alternatives())
        .or_else(|| {
            input
                .methods
                .and_then(|m| m.results.first())
                .map(|r| r.alternatives.len())
        })
        .unwrap_or(0);

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputMeta {
            path: input.input_path.clone(),
            format: input.format.extension().to_string(),
            n_alternatives,
            n_criteria: input.profile.map(|p| p.n_criteria()),
        },
        profile: input.profile.cloned(),
        methods,
        ranking_methods: input
            .ranking
            .map(|r| r.methods.clone())
            .unwrap_or_default(),
        aggregation,
        combined_rows,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
