//! Score records and qualitative severity ratings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sub-score value for fields a CVSS version does not define.
pub const NOT_APPLICABLE: f64 = -1.0;

/// Qualitative severity rating scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Rating for a score in `[0.0, 10.0]`.
    ///
    /// | Score      | Rating   |
    /// |------------|----------|
    /// | 0.0        | None     |
    /// | 0.1 – 3.9  | Low      |
    /// | 4.0 – 6.9  | Medium   |
    /// | 7.0 – 8.9  | High     |
    /// | 9.0 – 10.0 | Critical |
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 9.0 => Severity::Critical,
            s if s >= 7.0 => Severity::High,
            s if s >= 4.0 => Severity::Medium,
            s if s > 0.0 => Severity::Low,
            _ => Severity::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a vector.
///
/// CVSS v4.0 only defines a single score; the sub-score fields exist for
/// parity with the older calculators and hold [`NOT_APPLICABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub base_score: f64,
    pub impact_sub_score: f64,
    pub exploitability_sub_score: f64,
    pub temporal_score: f64,
    pub environmental_score: f64,
}

impl Score {
    /// Score carrying only a base score
    pub fn base_only(base_score: f64) -> Self {
        Self {
            base_score,
            impact_sub_score: NOT_APPLICABLE,
            exploitability_sub_score: NOT_APPLICABLE,
            temporal_score: NOT_APPLICABLE,
            environmental_score: NOT_APPLICABLE,
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::from_score(self.base_score)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ({})", self.base_score, self.severity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::from_score(0.0), Severity::None);
        assert_eq!(Severity::from_score(0.1), Severity::Low);
        assert_eq!(Severity::from_score(3.9), Severity::Low);
        assert_eq!(Severity::from_score(4.0), Severity::Medium);
        assert_eq!(Severity::from_score(6.9), Severity::Medium);
        assert_eq!(Severity::from_score(7.0), Severity::High);
        assert_eq!(Severity::from_score(8.9), Severity::High);
        assert_eq!(Severity::from_score(9.0), Severity::Critical);
        assert_eq!(Severity::from_score(10.0), Severity::Critical);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Low > Severity::None);
    }

    #[test]
    fn test_base_only_placeholders() {
        let score = Score::base_only(9.3);
        assert_eq!(score.base_score, 9.3);
        assert_eq!(score.impact_sub_score, NOT_APPLICABLE);
        assert_eq!(score.environmental_score, NOT_APPLICABLE);
        assert_eq!(score.severity(), Severity::Critical);
        assert_eq!(score.to_string(), "9.3 (Critical)");
    }

    #[test]
    fn test_score_serialization() {
        let score = Score::base_only(5.5);
        let json = serde_json::to_string(&score).unwrap();
        let deserialized: Score = serde_json::from_str(&json).unwrap();
        assert_eq!(score, deserialized);

        let rating = serde_json::to_string(&Severity::Medium).unwrap();
        assert_eq!(rating, "\"MEDIUM\"");
    }
}
