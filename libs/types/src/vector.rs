//! Vector-string tokenizer shared by all CVSS versions
//!
//! A vector is a version prefix followed by `/`-separated `CODE:VALUE`
//! segments, e.g. `CVSS:4.0/AV:N/AC:L/...`. The tokenizer checks structure
//! and metric codes only; converting raw values into metric enums is the
//! caller's job.

use crate::errors::MalformedVectorError;

/// Prefix and metric codes accepted for one CVSS version.
#[derive(Debug, Clone, Copy)]
pub struct VectorGrammar {
    pub prefix: &'static str,
    /// Codes that must appear exactly once
    pub mandatory: &'static [&'static str],
    /// Codes that may appear at most once
    pub optional: &'static [&'static str],
}

impl VectorGrammar {
    pub fn is_known(&self, code: &str) -> bool {
        self.mandatory.contains(&code) || self.optional.contains(&code)
    }
}

/// Metric segments of a vector in submission order.
///
/// Invariant: codes are unique, known to the grammar, and every mandatory
/// code is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricTokens<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> MetricTokens<'a> {
    /// Raw value submitted for `code`
    pub fn get(&self, code: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split `vector` into metric segments according to `grammar`.
///
/// Input is taken verbatim: surrounding whitespace is not part of the wire
/// format and fails the prefix or value checks.
pub fn tokenize<'a>(
    vector: &'a str,
    grammar: &VectorGrammar,
) -> Result<MetricTokens<'a>, MalformedVectorError> {
    if vector.is_empty() {
        return Err(MalformedVectorError::Empty);
    }

    let mut segments = vector.split('/');
    let prefix = segments.next().unwrap_or_default();
    if prefix != grammar.prefix {
        return Err(MalformedVectorError::UnsupportedPrefix {
            found: prefix.to_string(),
            expected: grammar.prefix.to_string(),
        });
    }

    let mut entries: Vec<(&'a str, &'a str)> = Vec::new();
    for segment in segments {
        let (code, value) = segment
            .split_once(':')
            .ok_or_else(|| MalformedVectorError::MissingSeparator {
                segment: segment.to_string(),
            })?;

        if !grammar.is_known(code) {
            return Err(MalformedVectorError::UnknownMetric { code: code.to_string() });
        }
        if entries.iter().any(|(seen, _)| *seen == code) {
            return Err(MalformedVectorError::DuplicateMetric { code: code.to_string() });
        }
        entries.push((code, value));
    }

    if entries.is_empty() {
        return Err(MalformedVectorError::TooFewSegments);
    }

    if let Some(missing) = grammar
        .mandatory
        .iter()
        .find(|code| !entries.iter().any(|(seen, _)| seen == *code))
    {
        return Err(MalformedVectorError::MissingMandatory { code: missing.to_string() });
    }

    Ok(MetricTokens { entries })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const GRAMMAR: VectorGrammar = VectorGrammar {
        prefix: "CVSS:4.0",
        mandatory: &["AV"],
        optional: &["AC", "E"],
    };

    proptest! {
        /// Arbitrary input never panics, and accepted input honors the invariants.
        #[test]
        fn prop_tokenize_is_total(input in ".{0,64}") {
            if let Ok(tokens) = tokenize(&input, &GRAMMAR) {
                prop_assert!(tokens.get("AV").is_some());
                let mut codes: Vec<_> = tokens.iter().map(|(code, _)| code).collect();
                let total = codes.len();
                codes.sort_unstable();
                codes.dedup();
                prop_assert_eq!(codes.len(), total);
            }
        }

        #[test]
        fn prop_accepts_generated_vectors(
            av in "[A-Z]",
            extra in prop::option::of("[A-Z]"),
        ) {
            let mut vector = format!("CVSS:4.0/AV:{}", av);
            if let Some(value) = &extra {
                vector.push_str(&format!("/E:{}", value));
            }
            let tokens = tokenize(&vector, &GRAMMAR).unwrap();
            prop_assert_eq!(tokens.get("AV"), Some(av.as_str()));
            prop_assert_eq!(tokens.get("E"), extra.as_deref());
        }
    }
}
