use tracing::{debug, warn};

use crate::config::TranscriptionConfig;
use crate::error::TranscriptionResult;
use crate::providers::{create_provider, TranscriptionProviderTrait};
use crate::transcript::Transcript;

/// Speech-to-text service for medical note audio
pub struct TranscriptionService {
    config: TranscriptionConfig,
    provider: Box<dyn TranscriptionProviderTrait>,
}

impl TranscriptionService {
    /// Create a new transcription service
    pub fn new(config: TranscriptionConfig) -> TranscriptionResult<Self> {
        let provider = create_provider(&config.provider)?;
        Ok(Self { config, provider })
    }

    /// Build a service around an already-constructed provider.
    ///
    /// Lets tests substitute the provider without network access.
    pub fn with_provider(
        config: TranscriptionConfig,
        provider: Box<dyn TranscriptionProviderTrait>,
    ) -> Self {
        Self { config, provider }
    }

    /// Transcribe raw audio bytes to text.
    ///
    /// Best effort: any provider failure - network error, non-JSON body,
    /// a response missing the expected transcript field - yields an empty
    /// transcript instead of an error. This is the whole failure contract
    /// of the adapter; nothing propagates to the caller.
    pub async fn transcribe_audio(&self, audio_data: &[u8]) -> Transcript {
        debug!(
            audio_size = audio_data.len(),
            provider = self.provider.name(),
            "Transcribing audio"
        );

        match self.provider.transcribe(audio_data).await {
            Ok(transcript) => transcript,
            Err(error) => {
                warn!(
                    provider = self.provider.name(),
                    %error,
                    "Transcription failed, returning empty transcript"
                );
                Transcript::empty(self.provider.name())
            }
        }
    }

    pub fn max_audio_bytes(&self) -> usize {
        self.config.max_audio_bytes
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranscriptionProvider;
    use crate::error::TranscriptionError;
    use async_trait::async_trait;

    fn test_config() -> TranscriptionConfig {
        TranscriptionConfig {
            provider: TranscriptionProvider::Deepgram {
                api_url: "http://localhost:0".to_string(),
                api_key: "test-key".to_string(),
                model: None,
            },
            max_audio_bytes: 1024,
        }
    }

    struct FixedProvider {
        text: &'static str,
    }

    #[async_trait]
    impl TranscriptionProviderTrait for FixedProvider {
        async fn transcribe(&self, _audio_data: &[u8]) -> TranscriptionResult<Transcript> {
            Ok(Transcript::new(self.text, self.name()))
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl TranscriptionProviderTrait for FailingProvider {
        async fn transcribe(&self, _audio_data: &[u8]) -> TranscriptionResult<Transcript> {
            Err(TranscriptionError::Provider("upstream unavailable".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_successful_provider_passes_through() {
        let service =
            TranscriptionService::with_provider(test_config(), Box::new(FixedProvider { text: "hello world" }));
        let transcript = service.transcribe_audio(&[1, 2, 3]).await;
        assert_eq!(transcript.text, "hello world");
    }

    #[tokio::test]
    async fn test_provider_failure_degrades_to_empty_transcript() {
        let service = TranscriptionService::with_provider(test_config(), Box::new(FailingProvider));
        let transcript = service.transcribe_audio(&[1, 2, 3]).await;
        assert!(transcript.is_empty());
        assert_eq!(transcript.provider, "failing");
    }

    #[test]
    fn test_max_audio_bytes_exposed() {
        let service = TranscriptionService::with_provider(test_config(), Box::new(FailingProvider));
        assert_eq!(service.max_audio_bytes(), 1024);
    }
}
