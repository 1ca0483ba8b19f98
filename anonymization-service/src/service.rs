use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::anonymization::AnonymizationResult;
use crate::config::AnonymizerConfig;
use crate::error::AnonymizerResult;
use crate::recognizers::{create_recognizer, EntityRecognizer};

/// Anonymization service for medical note text
pub struct AnonymizerService {
    recognizer: Box<dyn EntityRecognizer>,
}

impl AnonymizerService {
    /// Create a new anonymization service
    pub fn new(config: AnonymizerConfig) -> AnonymizerResult<Self> {
        let recognizer = create_recognizer(&config)?;
        Ok(Self { recognizer })
    }

    /// Build a service around an already-constructed recognizer.
    ///
    /// Lets tests substitute the engine without compiling the built-in
    /// pattern table.
    pub fn with_recognizer(recognizer: Box<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Replace every sensitive entity's surface text with its label tag.
    ///
    /// Substitution is keyed by the span's literal surface text: ALL
    /// occurrences of that text in the working string are rewritten, in
    /// recognition-output order, not just the occurrence at the matched
    /// offset. Repeated surface text collapses to whichever label this
    /// pass assigned it, and a later replacement can rewrite text an
    /// earlier replacement introduced.
    ///
    /// Never fails: recognition and substitution are pure, and text with
    /// no recognizable entities comes back unchanged.
    pub fn anonymize(&self, text: &str) -> AnonymizationResult {
        let entities = self.recognizer.recognize(text);
        debug!(
            entity_count = entities.len(),
            text_len = text.len(),
            "Anonymizing text"
        );

        let mut anonymized = text.to_string();
        for span in &entities {
            if !span.label.is_sensitive() {
                continue;
            }
            anonymized = anonymized.replace(&span.text, &span.label.placeholder());
        }

        AnonymizationResult {
            id: Uuid::new_v4(),
            text: anonymized,
            entities,
            recognizer: self.recognizer.name().to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn recognizer_name(&self) -> &'static str {
        self.recognizer.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_service_anonymizes_sample_note() {
        let service = AnonymizerService::new(AnonymizerConfig::default()).unwrap();
        let result = service.anonymize("Patient John Doe visited on March 5th.");
        assert_eq!(result.text, "Patient [PERSON] visited on [DATE].");
        assert_eq!(result.recognizer, "pattern");
    }

    #[test]
    fn test_empty_input_returns_empty() {
        let service = AnonymizerService::new(AnonymizerConfig::default()).unwrap();
        let result = service.anonymize("");
        assert_eq!(result.text, "");
        assert!(result.entities.is_empty());
    }

    #[test]
    fn test_text_without_entities_unchanged() {
        let service = AnonymizerService::new(AnonymizerConfig::default()).unwrap();
        let result = service.anonymize("Take two tablets daily.");
        assert_eq!(result.text, "Take two tablets daily.");
    }

    #[test]
    fn test_non_sensitive_spans_left_in_place() {
        let service = AnonymizerService::new(AnonymizerConfig::default()).unwrap();
        let result = service.anonymize("Blood pressure today is 140/90 mmHg.");
        // "today" is a DATE; the vitals numerals are CARDINAL and stay.
        assert_eq!(result.text, "Blood pressure [DATE] is 140/90 mmHg.");
        assert!(result.replaced_entities().count() == 1);
    }
}
