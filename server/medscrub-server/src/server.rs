use std::sync::Arc;

use anyhow::Result;

use anonymization_service::{AnonymizerConfig, AnonymizerService};
use transcription_service::{TranscriptionConfig, TranscriptionService};

/// Main MedScrub server state
#[derive(Clone)]
pub struct MedscrubServer {
    /// Server configuration
    pub config: ServerConfig,
    /// Speech-to-text adapter
    pub transcription: Arc<TranscriptionService>,
    /// Anonymization service
    pub anonymizer: Arc<AnonymizerService>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl MedscrubServer {
    /// Create a new MedScrub server instance.
    ///
    /// Fails when the transcription credential is missing or the
    /// recognizer pattern table cannot be compiled - in either case the
    /// process cannot serve requests and should not come up.
    pub fn new() -> Result<Self> {
        let config = ServerConfig::default();

        let transcription = TranscriptionService::new(TranscriptionConfig::from_env()?)?;
        let anonymizer = AnonymizerService::new(AnonymizerConfig::from_env()?)?;

        Ok(Self {
            config,
            transcription: Arc::new(transcription),
            anonymizer: Arc::new(anonymizer),
        })
    }

    /// Create a server instance from pre-built services.
    /// This is useful for testing.
    pub fn with_services(
        config: ServerConfig,
        transcription: Arc<TranscriptionService>,
        anonymizer: Arc<AnonymizerService>,
    ) -> Self {
        Self {
            config,
            transcription,
            anonymizer,
        }
    }

    /// Get server configuration
    pub fn get_config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for MedscrubServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MedscrubServer")
            .field("config", &self.config)
            .field("transcription_provider", &self.transcription.provider_name())
            .field("recognizer", &self.anonymizer.recognizer_name())
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "MedScrub Engine".to_string(),
            request_timeout: 30,
        }
    }
}
