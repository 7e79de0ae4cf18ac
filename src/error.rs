//! Error handling for the jobfit application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobFitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    #[error("Matching error: {0}")]
    Matching(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, JobFitError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for JobFitError {
    fn from(err: anyhow::Error) -> Self {
        JobFitError::Matching(err.to_string())
    }
}

impl From<csv::Error> for JobFitError {
    fn from(err: csv::Error) -> Self {
        JobFitError::Catalog(err.to_string())
    }
}
