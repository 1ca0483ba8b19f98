use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TranscriptionResult<T> = Result<T, TranscriptionError>;
