//! Error types for the sentiment pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<config::ConfigError> for DashboardError {
    fn from(err: config::ConfigError) -> Self {
        DashboardError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
