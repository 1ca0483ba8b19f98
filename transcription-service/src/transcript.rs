use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transcript produced from one audio upload.
///
/// Immutable once created; there is no versioning and nothing is persisted
/// beyond the request that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub id: Uuid,
    pub text: String,
    pub provider: String,
    pub created_at: DateTime<Utc>,
}

impl Transcript {
    pub fn new(text: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            provider: provider.into(),
            created_at: Utc::now(),
        }
    }

    /// The transcript returned when the provider call fails or the response
    /// lacks the expected transcript field.
    pub fn empty(provider: impl Into<String>) -> Self {
        Self::new(String::new(), provider)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::empty("deepgram");
        assert!(transcript.is_empty());
        assert_eq!(transcript.provider, "deepgram");
    }

    #[test]
    fn test_new_transcript_keeps_text() {
        let transcript = Transcript::new("hello world", "whisper");
        assert_eq!(transcript.text, "hello world");
        assert!(!transcript.is_empty());
    }
}
