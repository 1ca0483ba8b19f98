/// Deepgram pre-recorded transcription provider.
///
/// Sends the raw audio bytes in the request body with a `Token`
/// authorization header and extracts the transcript from the nested
/// `results.channels[0].alternatives[0].transcript` field.
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::audio;
use crate::config::TranscriptionProvider;
use crate::error::{TranscriptionError, TranscriptionResult};
use crate::providers::TranscriptionProviderTrait;
use crate::transcript::Transcript;

/// Response shape of the Deepgram listen endpoint.
///
/// Every level is defaulted: a body missing any part of the transcript
/// chain extracts to the empty string instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DeepgramResponse {
    #[serde(default)]
    results: DeepgramResults,
}

#[derive(Debug, Default, Deserialize)]
struct DeepgramResults {
    #[serde(default)]
    channels: Vec<DeepgramChannel>,
}

#[derive(Debug, Default, Deserialize)]
struct DeepgramChannel {
    #[serde(default)]
    alternatives: Vec<DeepgramAlternative>,
}

#[derive(Debug, Default, Deserialize)]
struct DeepgramAlternative {
    #[serde(default)]
    transcript: String,
}

impl DeepgramResponse {
    /// Walk the nested response; any missing level yields "".
    pub(crate) fn transcript(&self) -> String {
        self.results
            .channels
            .first()
            .and_then(|channel| channel.alternatives.first())
            .map(|alternative| alternative.transcript.clone())
            .unwrap_or_default()
    }
}

pub struct DeepgramProvider {
    api_url: String,
    api_key: String,
    model: Option<String>,
    client: Client,
}

impl DeepgramProvider {
    pub fn new(config: &TranscriptionProvider) -> TranscriptionResult<Self> {
        match config {
            TranscriptionProvider::Deepgram {
                api_url,
                api_key,
                model,
            } => Ok(Self {
                api_url: api_url.clone(),
                api_key: api_key.clone(),
                model: model.clone(),
                client: Client::new(),
            }),
            _ => Err(TranscriptionError::Config(
                "Deepgram provider requires a deepgram configuration".to_string(),
            )),
        }
    }
}

#[async_trait]
impl TranscriptionProviderTrait for DeepgramProvider {
    async fn transcribe(&self, audio_data: &[u8]) -> TranscriptionResult<Transcript> {
        if audio_data.is_empty() {
            return Ok(Transcript::empty(self.name()));
        }

        let content_type = audio::detect_content_type(audio_data);
        debug!(
            audio_size = audio_data.len(),
            content_type, "Sending audio to Deepgram"
        );

        let mut request = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Token {}", self.api_key))
            .header("Content-Type", content_type)
            .body(audio_data.to_vec());

        if let Some(model) = &self.model {
            request = request.query(&[("model", model.as_str())]);
        }

        let response = request.send().await?;
        let body: DeepgramResponse = response.json().await?;

        Ok(Transcript::new(body.transcript(), self.name()))
    }

    fn name(&self) -> &'static str {
        "deepgram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_response_extracts_transcript() {
        let body = json!({
            "results": {
                "channels": [
                    { "alternatives": [ { "transcript": "hello world", "confidence": 0.98 } ] }
                ]
            }
        });
        let response: DeepgramResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.transcript(), "hello world");
    }

    #[test]
    fn test_missing_transcript_field_yields_empty() {
        let body = json!({
            "results": {
                "channels": [ { "alternatives": [ { "confidence": 0.5 } ] } ]
            }
        });
        let response: DeepgramResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.transcript(), "");
    }

    #[test]
    fn test_empty_channels_yields_empty() {
        let body = json!({ "results": { "channels": [] } });
        let response: DeepgramResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.transcript(), "");
    }

    #[test]
    fn test_unrelated_body_yields_empty() {
        let body = json!({ "metadata": { "request_id": "abc" } });
        let response: DeepgramResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.transcript(), "");
    }
}
