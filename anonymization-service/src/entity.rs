use std::fmt;

use serde::{Deserialize, Serialize};

/// Label assigned to a recognized span.
///
/// Mirrors the label set of the upstream recognition engine. Labels outside
/// [`EntityLabel::SENSITIVE`] are recognized and reported but never
/// replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    /// Person name
    Person,
    /// Company, institution, facility
    Org,
    /// Geopolitical entity: city, state, country
    Gpe,
    /// Absolute or relative date expression
    Date,
    /// Non-political location: region, landmark
    Loc,
    /// Time of day
    Time,
    /// Nationality, religious or political group
    Norp,
    /// Monetary amount
    Money,
    /// Percentage
    Percent,
    /// Bare numeral
    Cardinal,
}

impl EntityLabel {
    /// Labels whose spans are replaced during anonymization. Fixed set,
    /// deliberately not caller-configurable.
    pub const SENSITIVE: [EntityLabel; 8] = [
        EntityLabel::Person,
        EntityLabel::Org,
        EntityLabel::Gpe,
        EntityLabel::Date,
        EntityLabel::Loc,
        EntityLabel::Time,
        EntityLabel::Norp,
        EntityLabel::Money,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Date => "DATE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Time => "TIME",
            EntityLabel::Norp => "NORP",
            EntityLabel::Money => "MONEY",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Cardinal => "CARDINAL",
        }
    }

    pub fn is_sensitive(&self) -> bool {
        Self::SENSITIVE.contains(self)
    }

    /// The tag written in place of a span with this label.
    pub fn placeholder(&self) -> String {
        format!("[{}]", self.as_str())
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled substring identified by the recognition engine.
///
/// Offsets are byte positions into the text recognition ran over. Spans are
/// produced fresh per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub label: EntityLabel,
}

impl EntitySpan {
    pub fn new(start: usize, end: usize, text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_labels() {
        assert!(EntityLabel::Person.is_sensitive());
        assert!(EntityLabel::Money.is_sensitive());
        assert!(!EntityLabel::Cardinal.is_sensitive());
        assert!(!EntityLabel::Percent.is_sensitive());
    }

    #[test]
    fn test_placeholder_format() {
        assert_eq!(EntityLabel::Person.placeholder(), "[PERSON]");
        assert_eq!(EntityLabel::Gpe.placeholder(), "[GPE]");
    }

    #[test]
    fn test_label_serializes_uppercase() {
        let json = serde_json::to_string(&EntityLabel::Norp).unwrap();
        assert_eq!(json, "\"NORP\"");
    }
}
