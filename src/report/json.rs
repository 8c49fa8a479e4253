use serde::Serialize;

use crate::error::Result;
use crate::model::criteria::CriteriaProfile;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub path: Option<String>,
    pub format: String,
    pub n_alternatives: usize,
    pub n_criteria: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopEntry {
    pub rank: u32,
    pub key: String,
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodStatus {
    pub method: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideal_point: Option<Vec<f64>>,
    pub top: Vec<TopEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateSummary {
    pub method: String,
    pub top: Vec<TopEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<CriteriaProfile>,
    pub methods: Vec<MethodStatus>,
    pub ranking_methods: Vec<String>,
    pub aggregation: Vec<AggregateSummary>,
    pub combined_rows: usize,
}

pub fn render_summary_json(data: &SummaryData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
