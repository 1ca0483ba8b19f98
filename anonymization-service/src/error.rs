use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnonymizerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pattern compilation error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type AnonymizerResult<T> = Result<T, AnonymizerError>;
