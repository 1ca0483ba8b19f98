/// Self-hosted Whisper provider, OpenAI-compatible endpoint.
///
/// Posts the audio as a multipart form to `/v1/audio/transcriptions` and
/// reads the flat `text` field of the response. Useful when audio must not
/// leave the deployment.
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::audio;
use crate::config::TranscriptionProvider;
use crate::error::{TranscriptionError, TranscriptionResult};
use crate::providers::TranscriptionProviderTrait;
use crate::transcript::Transcript;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WhisperResponse {
    #[serde(default)]
    text: String,
}

pub struct WhisperProvider {
    api_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl WhisperProvider {
    pub fn new(config: &TranscriptionProvider) -> TranscriptionResult<Self> {
        match config {
            TranscriptionProvider::Whisper {
                api_url,
                api_key,
                model,
            } => Ok(Self {
                api_url: api_url.trim_end_matches('/').to_string(),
                api_key: api_key.clone(),
                model: model.clone().unwrap_or_else(|| "whisper-1".to_string()),
                client: Client::new(),
            }),
            _ => Err(TranscriptionError::Config(
                "Whisper provider requires a whisper configuration".to_string(),
            )),
        }
    }
}

#[async_trait]
impl TranscriptionProviderTrait for WhisperProvider {
    async fn transcribe(&self, audio_data: &[u8]) -> TranscriptionResult<Transcript> {
        if audio_data.is_empty() {
            return Ok(Transcript::empty(self.name()));
        }

        let content_type = audio::detect_content_type(audio_data);
        debug!(
            audio_size = audio_data.len(),
            content_type, "Sending audio to Whisper endpoint"
        );

        let part = Part::bytes(audio_data.to_vec())
            .file_name("note-audio")
            .mime_str(content_type)?;
        let form = Form::new()
            .part("file", part)
            .text("model", self.model.clone());

        let mut request = self
            .client
            .post(format!("{}/v1/audio/transcriptions", self.api_url))
            .multipart(form);

        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = request.send().await?;
        let body: WhisperResponse = response.json().await?;

        Ok(Transcript::new(body.text, self.name()))
    }

    fn name(&self) -> &'static str {
        "whisper"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_field_extracted() {
        let response: WhisperResponse =
            serde_json::from_value(json!({ "text": "take two tablets daily" })).unwrap();
        assert_eq!(response.text, "take two tablets daily");
    }

    #[test]
    fn test_missing_text_field_yields_empty() {
        let response: WhisperResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text, "");
    }
}
