use serde::{Deserialize, Serialize};

use crate::error::{TranscriptionError, TranscriptionResult};

pub const DEFAULT_DEEPGRAM_API_URL: &str = "https://api.deepgram.com/v1/listen";
pub const DEFAULT_WHISPER_API_URL: &str = "http://localhost:8000";

/// Provider-specific configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TranscriptionProvider {
    /// Deepgram hosted pre-recorded transcription
    Deepgram {
        api_url: String,
        api_key: String,
        model: Option<String>, // e.g. "nova-2", "base"
    },
    /// Self-hosted Whisper behind an OpenAI-compatible endpoint
    Whisper {
        api_url: String,
        api_key: Option<String>,
        model: Option<String>, // e.g. "whisper-1", "large-v3"
    },
}

/// Transcription service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranscriptionConfig {
    pub provider: TranscriptionProvider,
    /// Upload size cap enforced before any provider call
    pub max_audio_bytes: usize,
}

impl TranscriptionConfig {
    /// Load configuration from environment variables.
    ///
    /// `DEEPGRAM_API_KEY` is required when the Deepgram provider is
    /// selected; without it the process cannot serve audio requests and
    /// startup fails.
    pub fn from_env() -> TranscriptionResult<Self> {
        let max_audio_bytes = std::env::var("TRANSCRIBE_MAX_AUDIO_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(25 * 1024 * 1024);

        let provider_type = std::env::var("TRANSCRIBE_PROVIDER")
            .unwrap_or_else(|_| "deepgram".to_string());

        let provider = match provider_type.to_lowercase().as_str() {
            "deepgram" => TranscriptionProvider::Deepgram {
                api_url: std::env::var("DEEPGRAM_API_URL")
                    .unwrap_or_else(|_| DEFAULT_DEEPGRAM_API_URL.to_string()),
                api_key: std::env::var("DEEPGRAM_API_KEY").map_err(|_| {
                    TranscriptionError::Config(
                        "DEEPGRAM_API_KEY must be set for the deepgram provider".to_string(),
                    )
                })?,
                model: std::env::var("DEEPGRAM_MODEL").ok(),
            },
            "whisper" => TranscriptionProvider::Whisper {
                api_url: std::env::var("WHISPER_API_URL")
                    .unwrap_or_else(|_| DEFAULT_WHISPER_API_URL.to_string()),
                api_key: std::env::var("WHISPER_API_KEY").ok(),
                model: std::env::var("WHISPER_MODEL").ok(),
            },
            _ => {
                return Err(TranscriptionError::Config(format!(
                    "Unknown transcription provider: {}",
                    provider_type
                )))
            }
        };

        Ok(Self {
            provider,
            max_audio_bytes,
        })
    }
}
