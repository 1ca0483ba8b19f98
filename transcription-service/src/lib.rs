//! Transcription Service for MedScrub
//!
//! Maps raw medical note audio to plain text by calling a remote
//! speech-to-text provider. Audio bytes are treated as opaque: the only
//! inspection performed is container sniffing to choose an outbound
//! content type.
//!
//! # Providers
//!
//! - **Deepgram** (default) - hosted pre-recorded transcription
//! - **Whisper** - self-hosted, OpenAI-compatible endpoint
//!
//! # Failure policy
//!
//! [`TranscriptionService::transcribe_audio`] never fails. Any provider
//! error - network failure, non-JSON body, a response missing the expected
//! transcript field - degrades to an empty transcript with a warning log.
//! Callers always receive a transcript they can render.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use transcription_service::{TranscriptionConfig, TranscriptionService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let audio_bytes: Vec<u8> = vec![];
//! let config = TranscriptionConfig::from_env()?;
//! let service = TranscriptionService::new(config)?;
//!
//! let transcript = service.transcribe_audio(&audio_bytes).await;
//! println!("Transcript: {}", transcript.text);
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod providers;
pub mod service;
pub mod transcript;

pub use config::*;
pub use error::*;
pub use service::*;
pub use transcript::*;
