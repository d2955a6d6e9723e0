use crate::scheme::Scheme;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarksError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown field '{field}' for the {scheme} scheme")]
    UnknownField { scheme: Scheme, field: String },

    #[error("Unknown scheme '{0}' (expected theory, hybrid or practical)")]
    UnknownScheme(String),

    #[error("Command Error: {0}")]
    Command(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type MarksResult<T> = Result<T, MarksError>;
