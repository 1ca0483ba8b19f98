pub mod deepgram;
pub mod whisper;

use async_trait::async_trait;

use crate::config::TranscriptionProvider;
use crate::error::TranscriptionResult;
use crate::transcript::Transcript;

/// Trait for speech-to-text providers
#[async_trait]
pub trait TranscriptionProviderTrait: Send + Sync {
    /// Transcribe raw audio bytes to text
    async fn transcribe(&self, audio_data: &[u8]) -> TranscriptionResult<Transcript>;

    /// Short provider name used in transcript metadata and logs
    fn name(&self) -> &'static str;
}

/// Create a provider instance based on configuration
pub fn create_provider(
    config: &TranscriptionProvider,
) -> TranscriptionResult<Box<dyn TranscriptionProviderTrait>> {
    match config {
        TranscriptionProvider::Deepgram { .. } => {
            Ok(Box::new(deepgram::DeepgramProvider::new(config)?))
        }
        TranscriptionProvider::Whisper { .. } => {
            Ok(Box::new(whisper::WhisperProvider::new(config)?))
        }
    }
}
