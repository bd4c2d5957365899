//! Error types for vector parsing
//!
//! Every rejection is a single error kind (malformed vector) with a variant
//! naming the reason, so callers can match on it or just print it.

use thiserror::Error;

/// A vector string that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedVectorError {
    #[error("malformed vector: empty input")]
    Empty,

    #[error("malformed vector: no metrics after prefix")]
    TooFewSegments,

    #[error("malformed vector: unsupported prefix '{found}', expected '{expected}'")]
    UnsupportedPrefix { found: String, expected: String },

    #[error("malformed vector: segment '{segment}' has no ':' separator")]
    MissingSeparator { segment: String },

    #[error("malformed vector: unknown metric '{code}'")]
    UnknownMetric { code: String },

    #[error("malformed vector: duplicate metric '{code}'")]
    DuplicateMetric { code: String },

    #[error("malformed vector: invalid value '{value}' for metric '{code}'")]
    InvalidValue { code: String, value: String },

    #[error("malformed vector: missing mandatory metric '{code}'")]
    MissingMandatory { code: String },
}

impl MalformedVectorError {
    /// Metric code the error refers to, when there is one.
    pub fn metric_code(&self) -> Option<&str> {
        match self {
            Self::UnknownMetric { code }
            | Self::DuplicateMetric { code }
            | Self::InvalidValue { code, .. }
            | Self::MissingMandatory { code } => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_metric_display() {
        let err = MalformedVectorError::DuplicateMetric { code: "AV".to_string() };
        assert_eq!(err.to_string(), "malformed vector: duplicate metric 'AV'");
    }

    #[test]
    fn test_invalid_value_mentions_code_and_value() {
        let err = MalformedVectorError::InvalidValue {
            code: "AC".to_string(),
            value: "Q".to_string(),
        };
        assert!(err.to_string().contains("AC"));
        assert!(err.to_string().contains("'Q'"));
        assert_eq!(err.metric_code(), Some("AC"));
    }

    #[test]
    fn test_structural_errors_have_no_metric_code() {
        assert_eq!(MalformedVectorError::Empty.metric_code(), None);
        let err = MalformedVectorError::UnsupportedPrefix {
            found: "CVSS:3.1".to_string(),
            expected: "CVSS:4.0".to_string(),
        };
        assert!(err.to_string().starts_with("malformed vector:"));
        assert_eq!(err.metric_code(), None);
    }
}
