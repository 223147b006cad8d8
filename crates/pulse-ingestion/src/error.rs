use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Invalid share '{value}' for {physician}: {reason}")]
    InvalidShare {
        physician: String,
        value: String,
        reason: String,
    },

    #[error("No data rows in uploaded file")]
    Empty,
}

pub type Result<T> = std::result::Result<T, IngestError>;
