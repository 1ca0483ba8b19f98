//! Anonymization Service for MedScrub
//!
//! Detects sensitive entities in medical note text and replaces each one's
//! surface text with a bracketed label tag, e.g. `John Doe` becomes
//! `[PERSON]` and `March 5th` becomes `[DATE]`.
//!
//! Recognition is an injected capability: [`EntityRecognizer`] is the seam,
//! and the built-in [`recognizers::pattern::PatternRecognizer`] is one
//! implementation of it. Tests substitute their own.
//!
//! # Substitution semantics
//!
//! Replacement is a global textual substitution keyed by each span's
//! literal surface text, applied in recognition-output order. Every
//! occurrence of the surface text is rewritten, not just the one at the
//! matched offset. Two consequences carry over from this policy and are
//! covered by tests rather than "fixed":
//!
//! - results are replacement-order-dependent when one span's text overlaps
//!   text another replacement introduced;
//! - identical surface text appearing in different semantic contexts is
//!   collapsed to whichever label this pass assigned it.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use anonymization_service::{AnonymizerConfig, AnonymizerService};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = AnonymizerService::new(AnonymizerConfig::default())?;
//! let result = service.anonymize("Patient John Doe visited on March 5th.");
//! assert_eq!(result.text, "Patient [PERSON] visited on [DATE].");
//! # Ok(())
//! # }
//! ```

pub mod anonymization;
pub mod config;
pub mod entity;
pub mod error;
pub mod lexicon;
pub mod recognizers;
pub mod service;

pub use anonymization::*;
pub use config::*;
pub use entity::*;
pub use error::*;
pub use recognizers::EntityRecognizer;
pub use service::*;
