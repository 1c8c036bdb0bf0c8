//! Error handling for the talent scorer application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TalentScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Profile extraction error: {0}")]
    Extraction(String),

    #[error("Oracle error: {0}")]
    Oracle(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Output error: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, TalentScorerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for TalentScorerError {
    fn from(err: anyhow::Error) -> Self {
        TalentScorerError::Scoring(err.to_string())
    }
}
