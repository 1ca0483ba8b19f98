pub mod pattern;

use crate::config::{AnonymizerConfig, RecognizerKind};
use crate::entity::EntitySpan;
use crate::error::AnonymizerResult;

/// Trait for entity recognition engines.
///
/// `recognize` is pure and infallible: the same text yields the same spans
/// for the lifetime of the recognizer, and nothing about the input can make
/// it fail. Spans are returned in the engine's emission order; the built-in
/// engine emits non-overlapping spans in ascending start-offset order, and
/// downstream substitution follows emission order exactly.
pub trait EntityRecognizer: Send + Sync {
    /// Detect labeled spans in `text`.
    fn recognize(&self, text: &str) -> Vec<EntitySpan>;

    /// Short engine name recorded in anonymization results
    fn name(&self) -> &'static str;
}

/// Create a recognizer instance based on configuration
pub fn create_recognizer(
    config: &AnonymizerConfig,
) -> AnonymizerResult<Box<dyn EntityRecognizer>> {
    match config.recognizer {
        RecognizerKind::Pattern => Ok(Box::new(pattern::PatternRecognizer::new()?)),
    }
}
