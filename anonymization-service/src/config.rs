use serde::{Deserialize, Serialize};

use crate::error::{AnonymizerError, AnonymizerResult};

/// Recognition engine selection
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerKind {
    /// Built-in pattern and lexicon recognizer
    Pattern,
}

/// Anonymizer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnonymizerConfig {
    pub recognizer: RecognizerKind,
}

impl AnonymizerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AnonymizerResult<Self> {
        let kind = std::env::var("ANONYMIZER_RECOGNIZER")
            .unwrap_or_else(|_| "pattern".to_string());

        let recognizer = match kind.to_lowercase().as_str() {
            "pattern" => RecognizerKind::Pattern,
            _ => {
                return Err(AnonymizerError::Config(format!(
                    "Unknown recognizer: {}",
                    kind
                )))
            }
        };

        Ok(Self { recognizer })
    }
}

impl Default for AnonymizerConfig {
    fn default() -> Self {
        Self {
            recognizer: RecognizerKind::Pattern,
        }
    }
}
