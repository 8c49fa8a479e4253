use crate::report::format_f64_6;
use crate::report::json::{SummaryData, TopEntry};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Multi-Criteria Stock Ranking Report\n");
    out.push_str("===================================\n\n");

    out.push_str("1. Input\n");
    if let Some(path) = &data.input.path {
        out.push_str(&format!("Decision matrix: {}\n", path));
    }
    out.push_str(&format!("Alternatives: {}\n", data.input.n_alternatives));
    if let Some(n) = data.input.n_criteria {
        out.push_str(&format!("Criteria: {}\n", n));
    }
    if let Some(profile) = &data.profile {
        for c in &profile.criteria {
            out.push_str(&format!(
                "  {} weight={} {}\n",
                c.name,
                format_f64_6(c.weight),
                c.polarity.as_str()
            ));
        }
        out.push_str(&format!(
            "WASPAS lambda: {}\nVIKOR v: {}\n",
            format_f64_6(profile.lambda),
            format_f64_6(profile.v)
        ));
    }
    out.push('\n');

    if !data.methods.is_empty() {
        out.push_str("2. MCDM methods\n");
        for m in &data.methods {
            match &m.error {
                Some(err) => out.push_str(&format!("{}: FAILED ({})\n", m.method, err)),
                None => out.push_str(&format!("{}: {}\n", m.method, leaders(&m.top))),
            }
        }
        out.push('\n');
    }

    if !data.aggregation.is_empty() {
        out.push_str("3. Consensus rankings\n");
        out.push_str(&format!(
            "Methods aggregated: {}\n",
            data.ranking_methods.join(", ")
        ));
        for agg in &data.aggregation {
            out.push_str(&format!("{}: {}\n", agg.method, leaders(&agg.top)));
        }
        out.push_str(&format!("Combined report rows: {}\n", data.combined_rows));
        out.push_str(&format!("Agreement: {}\n", agreement_statement(data)));
    }

    out
}

fn leaders(top: &[TopEntry]) -> String {
    if top.is_empty() {
        return "no alternatives".to_string();
    }
    top.iter()
        .take(3)
        .map(|e| format!("#{} {}", e.rank, e.key))
        .collect::<Vec<_>>()
        .join(", ")
}

fn agreement_statement(data: &SummaryData) -> &'static str {
    let winners = data
        .aggregation
        .iter()
        .filter_map(|a| a.top.first().map(|e| e.key.as_str()))
        .collect::<Vec<_>>();
    match winners.split_first() {
        Some((first, rest)) if rest.iter().all(|w| w == first) => {
            "all aggregation methods agree on the top alternative"
        }
        Some(_) => "aggregation methods disagree on the top alternative",
        None => "no consensus computed",
    }
}
