//! Substitution-semantics tests.
//!
//! These pin the exact behavior of the surface-text substitution policy,
//! including the order-dependent edge cases, using a scripted recognizer so
//! the spans and their emission order are fully controlled.

use anonymization_service::{AnonymizerService, EntityLabel, EntityRecognizer, EntitySpan};

/// Recognizer that reports the configured (label, surface) pairs, in the
/// configured order, anchored at the first occurrence of each surface.
struct ScriptedRecognizer {
    spans: Vec<(EntityLabel, &'static str)>,
}

impl ScriptedRecognizer {
    fn new(spans: Vec<(EntityLabel, &'static str)>) -> Self {
        Self { spans }
    }
}

impl EntityRecognizer for ScriptedRecognizer {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        self.spans
            .iter()
            .filter_map(|(label, surface)| {
                text.find(surface)
                    .map(|start| EntitySpan::new(start, start + surface.len(), *surface, *label))
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

fn service(spans: Vec<(EntityLabel, &'static str)>) -> AnonymizerService {
    AnonymizerService::with_recognizer(Box::new(ScriptedRecognizer::new(spans)))
}

#[test]
fn single_entity_replaces_every_occurrence() {
    let service = service(vec![(EntityLabel::Person, "John Doe")]);
    let result = service.anonymize("John Doe arrived. John Doe was discharged.");
    assert_eq!(result.text, "[PERSON] arrived. [PERSON] was discharged.");
}

#[test]
fn concrete_person_and_date_scenario() {
    let service = service(vec![
        (EntityLabel::Person, "John Doe"),
        (EntityLabel::Date, "March 5th"),
    ]);
    let result = service.anonymize("Patient John Doe visited on March 5th.");
    assert_eq!(result.text, "Patient [PERSON] visited on [DATE].");
}

#[test]
fn empty_string_returns_empty_string() {
    let service = service(vec![(EntityLabel::Person, "John Doe")]);
    assert_eq!(service.anonymize("").text, "");
}

#[test]
fn text_without_entities_is_unchanged() {
    let service = service(vec![]);
    let result = service.anonymize("Take two tablets daily.");
    assert_eq!(result.text, "Take two tablets daily.");
}

#[test]
fn same_surface_text_collapses_to_one_label() {
    // "Washington" the person and "Washington" the place: whichever label
    // the pass assigned rewrites every occurrence.
    let service = service(vec![(EntityLabel::Person, "Washington")]);
    let result = service.anonymize("Washington was transferred to the Washington clinic.");
    assert_eq!(
        result.text,
        "[PERSON] was transferred to the [PERSON] clinic."
    );
}

#[test]
fn replacement_is_order_dependent_on_overlapping_text() {
    // A note that naturally contains the literal string "DATE". When that
    // span is processed before the date entity, both rewrites are clean.
    let text = "Form DATE was filed on March 5th.";

    let clean = service(vec![
        (EntityLabel::Org, "DATE"),
        (EntityLabel::Date, "March 5th"),
    ])
    .anonymize(text);
    assert_eq!(clean.text, "Form [ORG] was filed on [DATE].");

    // Reversed emission order: replacing "March 5th" first introduces a
    // "[DATE]" tag whose inner text the later "DATE" pass then rewrites.
    // This is preserved behavior, not a bug to fix.
    let mangled = service(vec![
        (EntityLabel::Date, "March 5th"),
        (EntityLabel::Org, "DATE"),
    ])
    .anonymize(text);
    assert_eq!(mangled.text, "Form [ORG] was filed on [[ORG]].");
}

#[test]
fn anonymization_is_not_idempotent_in_general() {
    // If a label tag's inner text is itself recognizable, a second pass
    // rewrites it again. Documented consequence of substitution by surface
    // text.
    let service = service(vec![
        (EntityLabel::Person, "John Doe"),
        (EntityLabel::Org, "PERSON"),
    ]);

    let once = service.anonymize("Seen John Doe at intake.");
    assert_eq!(once.text, "Seen [PERSON] at intake.");

    let twice = service.anonymize(&once.text);
    assert_eq!(twice.text, "Seen [[ORG]] at intake.");
    assert_ne!(once.text, twice.text);
}

#[test]
fn non_sensitive_labels_are_reported_but_not_replaced() {
    let service = service(vec![(EntityLabel::Cardinal, "140")]);
    let result = service.anonymize("Systolic reading 140 recorded.");
    assert_eq!(result.text, "Systolic reading 140 recorded.");
    assert_eq!(result.entities.len(), 1);
    assert_eq!(result.replaced_entities().count(), 0);
}
