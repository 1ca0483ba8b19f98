/// Built-in pattern and lexicon recognizer.
///
/// Pattern matching over regex tables plus small static lexicons - in
/// production deployments a full NLP engine can be swapped in behind
/// [`EntityRecognizer`]. Person detection is anchored on honorifics, role
/// words, and a given-name lexicon rather than open-world capitalization,
/// which keeps clinical vocabulary ("Blood Pressure", "Neurological") out
/// of the person label.
use lazy_static::lazy_static;
use regex::Regex;

use crate::entity::{EntityLabel, EntitySpan};
use crate::error::AnonymizerResult;
use crate::lexicon::Lexicon;
use crate::recognizers::EntityRecognizer;

lazy_static! {
    static ref HONORIFIC_PERSON_REGEX: Regex =
        Regex::new(r"\b(?:Dr|Mr|Mrs|Ms|Prof|Nurse)\.?\s([A-Z][a-z]+(?:\s[A-Z][a-z]+)?)\b")
            .unwrap();
    static ref ROLE_PERSON_REGEX: Regex =
        Regex::new(r"\b[Pp]atient\s([A-Z][a-z]+(?:\s[A-Z][a-z]+)?)\b").unwrap();
    static ref ORG_REGEX: Regex = Regex::new(
        r"\b(?:[A-Z][A-Za-z&'.-]+\s)+(?:Hospital|Clinic|Medical Center|Health System|Healthcare|Institute|Laboratory|Laboratories|Pharmacy|University|Foundation)\b"
    )
    .unwrap();
    static ref MONTH_DATE_REGEX: Regex = Regex::new(
        r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s\d{1,2}(?:st|nd|rd|th)?(?:,\s\d{4})?\b"
    )
    .unwrap();
    static ref NUMERIC_DATE_REGEX: Regex = Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap();
    static ref ISO_DATE_REGEX: Regex = Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap();
    static ref DURATION_DATE_REGEX: Regex = Regex::new(
        r"\b(?:(?:[Tt]he\s)?(?:past|last|next)\s)?(?:one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|\d+)\s(?:days?|weeks?|months?|years?)\b"
    )
    .unwrap();
    static ref RELATIVE_DATE_REGEX: Regex =
        Regex::new(r"\b(?:today|yesterday|tomorrow|tonight)\b").unwrap();
    static ref WEEKDAY_REGEX: Regex =
        Regex::new(r"\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b").unwrap();
    static ref MERIDIEM_TIME_REGEX: Regex =
        Regex::new(r"\b\d{1,2}(?::\d{2})?\s?(?:a\.m\.|p\.m\.|am\b|pm\b|AM\b|PM\b)").unwrap();
    static ref CLOCK_TIME_REGEX: Regex = Regex::new(r"\b\d{1,2}:\d{2}\b").unwrap();
    static ref MONEY_REGEX: Regex = Regex::new(
        r"\$\d+(?:,\d{3})*(?:\.\d{2})?(?:\s?(?:million|billion|thousand))?|\b\d+(?:,\d{3})*(?:\.\d{2})?\s?dollars\b"
    )
    .unwrap();
    static ref PERCENT_REGEX: Regex = Regex::new(r"\b\d+(?:\.\d+)?%").unwrap();
    static ref CARDINAL_REGEX: Regex = Regex::new(r"\b\d+(?:,\d{3})*\b").unwrap();
}

struct PatternEntry {
    label: EntityLabel,
    regex: Regex,
    /// Capture group holding the span; 0 takes the whole match.
    group: usize,
}

pub struct PatternRecognizer {
    patterns: Vec<PatternEntry>,
}

impl PatternRecognizer {
    /// Compile the pattern table.
    ///
    /// The lexicon-driven patterns are compiled here; a failure is a fatal
    /// startup error since the service cannot recognize anything without
    /// its engine.
    pub fn new() -> AnonymizerResult<Self> {
        // A given name may continue into a surname, so the person pattern
        // extends past the bare word list.
        let person_lexicon = Regex::new(&format!(
            r"\b(?:{})(?:\s[A-Z][a-z]+){{0,2}}\b",
            Lexicon::given_names().join("|")
        ))?;
        let place_lexicon = Regex::new(&Self::word_list_pattern(Lexicon::places()))?;
        let region_lexicon = Regex::new(&Self::word_list_pattern(Lexicon::regions()))?;
        let nationality_lexicon = Regex::new(&Self::word_list_pattern(Lexicon::nationalities()))?;

        // Entry order is the tie-break priority: earlier entries win exact
        // span ties during overlap resolution.
        let patterns = vec![
            PatternEntry { label: EntityLabel::Person, regex: HONORIFIC_PERSON_REGEX.clone(), group: 1 },
            PatternEntry { label: EntityLabel::Person, regex: ROLE_PERSON_REGEX.clone(), group: 1 },
            PatternEntry { label: EntityLabel::Person, regex: person_lexicon, group: 0 },
            PatternEntry { label: EntityLabel::Org, regex: ORG_REGEX.clone(), group: 0 },
            PatternEntry { label: EntityLabel::Gpe, regex: place_lexicon, group: 0 },
            PatternEntry { label: EntityLabel::Loc, regex: region_lexicon, group: 0 },
            PatternEntry { label: EntityLabel::Norp, regex: nationality_lexicon, group: 0 },
            PatternEntry { label: EntityLabel::Date, regex: MONTH_DATE_REGEX.clone(), group: 0 },
            PatternEntry { label: EntityLabel::Date, regex: NUMERIC_DATE_REGEX.clone(), group: 0 },
            PatternEntry { label: EntityLabel::Date, regex: ISO_DATE_REGEX.clone(), group: 0 },
            PatternEntry { label: EntityLabel::Date, regex: DURATION_DATE_REGEX.clone(), group: 0 },
            PatternEntry { label: EntityLabel::Date, regex: RELATIVE_DATE_REGEX.clone(), group: 0 },
            PatternEntry { label: EntityLabel::Date, regex: WEEKDAY_REGEX.clone(), group: 0 },
            PatternEntry { label: EntityLabel::Time, regex: MERIDIEM_TIME_REGEX.clone(), group: 0 },
            PatternEntry { label: EntityLabel::Time, regex: CLOCK_TIME_REGEX.clone(), group: 0 },
            PatternEntry { label: EntityLabel::Money, regex: MONEY_REGEX.clone(), group: 0 },
            PatternEntry { label: EntityLabel::Percent, regex: PERCENT_REGEX.clone(), group: 0 },
            PatternEntry { label: EntityLabel::Cardinal, regex: CARDINAL_REGEX.clone(), group: 0 },
        ];

        Ok(Self { patterns })
    }

    fn word_list_pattern(entries: &[&str]) -> String {
        format!(r"\b(?:{})\b", entries.join("|"))
    }

    /// Reduce raw matches to non-overlapping spans in document order.
    ///
    /// Earliest start wins; on a start tie the longest match wins; exact
    /// ties fall to the earlier pattern entry because the sort is stable.
    fn resolve_overlaps(mut spans: Vec<EntitySpan>) -> Vec<EntitySpan> {
        spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut resolved: Vec<EntitySpan> = Vec::new();
        for span in spans {
            let clear = resolved
                .last()
                .map_or(true, |previous| span.start >= previous.end);
            if clear {
                resolved.push(span);
            }
        }
        resolved
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut raw = Vec::new();
        for entry in &self.patterns {
            for captures in entry.regex.captures_iter(text) {
                let matched = match captures.get(entry.group) {
                    Some(matched) => matched,
                    None => continue,
                };
                raw.push(EntitySpan::new(
                    matched.start(),
                    matched.end(),
                    matched.as_str(),
                    entry.label,
                ));
            }
        }

        Self::resolve_overlaps(raw)
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> PatternRecognizer {
        PatternRecognizer::new().unwrap()
    }

    fn labels_of(text: &str) -> Vec<(EntityLabel, String)> {
        recognizer()
            .recognize(text)
            .into_iter()
            .map(|span| (span.label, span.text))
            .collect()
    }

    #[test]
    fn test_person_and_date() {
        let spans = labels_of("Patient John Doe visited on March 5th.");
        assert!(spans.contains(&(EntityLabel::Person, "John Doe".to_string())));
        assert!(spans.contains(&(EntityLabel::Date, "March 5th".to_string())));
    }

    #[test]
    fn test_honorific_excluded_from_person_span() {
        let spans = labels_of("Seen by Dr. Emily Carter this morning.");
        assert!(spans.contains(&(EntityLabel::Person, "Emily Carter".to_string())));
    }

    #[test]
    fn test_org_suffix_detection() {
        let spans = labels_of("Transferred from Mercy General Hospital overnight.");
        assert!(spans.contains(&(EntityLabel::Org, "Mercy General Hospital".to_string())));
    }

    #[test]
    fn test_gpe_and_nationality_lexicons() {
        let spans = labels_of("An American traveler returning from Boston.");
        assert!(spans.contains(&(EntityLabel::Norp, "American".to_string())));
        assert!(spans.contains(&(EntityLabel::Gpe, "Boston".to_string())));
    }

    #[test]
    fn test_money_and_percent() {
        let spans = labels_of("Billed $1,250.00 with 20% copay.");
        assert!(spans.contains(&(EntityLabel::Money, "$1,250.00".to_string())));
        assert!(spans.contains(&(EntityLabel::Percent, "20%".to_string())));
    }

    #[test]
    fn test_duration_and_relative_dates() {
        let spans = labels_of("Symptoms for the past two weeks, follow up today.");
        assert!(spans.contains(&(EntityLabel::Date, "the past two weeks".to_string())));
        assert!(spans.contains(&(EntityLabel::Date, "today".to_string())));
    }

    #[test]
    fn test_clock_times() {
        let spans = labels_of("Next dose at 10:30 pm or 7 am.");
        assert!(spans.contains(&(EntityLabel::Time, "10:30 pm".to_string())));
        assert!(spans.contains(&(EntityLabel::Time, "7 am".to_string())));
    }

    #[test]
    fn test_vitals_are_cardinal_not_sensitive() {
        let spans = recognizer().recognize("Blood pressure today is 140/90 mmHg.");
        let cardinals: Vec<_> = spans
            .iter()
            .filter(|span| span.label == EntityLabel::Cardinal)
            .collect();
        assert_eq!(cardinals.len(), 2);
        assert!(cardinals.iter().all(|span| !span.label.is_sensitive()));
    }

    #[test]
    fn test_no_entities_in_plain_instructions() {
        assert!(recognizer().recognize("Take two tablets daily.").is_empty());
    }

    #[test]
    fn test_empty_input_yields_no_spans() {
        assert!(recognizer().recognize("").is_empty());
    }

    #[test]
    fn test_spans_ordered_and_non_overlapping() {
        let spans = recognizer()
            .recognize("Patient Jane Smith of Boston, seen March 5th, 2024 at 9:15 am.");
        for window in spans.windows(2) {
            assert!(window[0].end <= window[1].start);
        }
    }

    #[test]
    fn test_overlap_prefers_longer_match() {
        // "New York City" and "New York" both match; the longer span wins.
        let spans = labels_of("Relocated from New York City last year.");
        assert!(spans.contains(&(EntityLabel::Gpe, "New York City".to_string())));
        assert!(!spans.contains(&(EntityLabel::Gpe, "New York".to_string())));
    }
}
