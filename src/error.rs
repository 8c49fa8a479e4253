use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum McdmError {
    #[error("input shape error in {stage}: {detail}")]
    InputShape { stage: String, detail: String },

    #[error("degenerate data in {method}: {detail}")]
    DegenerateData { method: String, detail: String },

    #[error("missing alternative in {method}: {key} is absent")]
    MissingAlternative { method: String, key: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {} (line {line}): {detail}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McdmError {
    pub fn shape(stage: &str, detail: impl Into<String>) -> Self {
        McdmError::InputShape {
            stage: stage.to_string(),
            detail: detail.into(),
        }
    }

    pub fn degenerate(method: &str, detail: impl Into<String>) -> Self {
        McdmError::DegenerateData {
            method: method.to_string(),
            detail: detail.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        McdmError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, line: usize, detail: impl Into<String>) -> Self {
        McdmError::Parse {
            path: path.into(),
            line,
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, McdmError>;
