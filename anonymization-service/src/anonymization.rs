use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::EntitySpan;

/// Result of one anonymization pass.
///
/// Carries the rewritten text and every span the recognizer reported,
/// including non-sensitive ones that were left in place. Nothing is
/// persisted; the result lives for the duration of the request that asked
/// for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationResult {
    pub id: Uuid,
    pub text: String,
    pub entities: Vec<EntitySpan>,
    pub recognizer: String,
    pub created_at: DateTime<Utc>,
}

impl AnonymizationResult {
    /// Spans that were actually replaced in this pass.
    pub fn replaced_entities(&self) -> impl Iterator<Item = &EntitySpan> {
        self.entities.iter().filter(|span| span.label.is_sensitive())
    }
}
