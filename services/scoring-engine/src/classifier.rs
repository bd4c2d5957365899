//! Equivalence class classifier
//!
//! Derives the six EQ digits (the MacroVector) from effective metrics.

use std::fmt;
use std::str::FromStr;

use cvss_types::metrics::{
    AttackComplexity, AttackRequirements, AttackVector, ExploitMaturity, Impact,
    PrivilegesRequired, Requirement, UserInteraction,
};
use serde::{Deserialize, Serialize};

use crate::resolver::EffectiveMetrics;

/// Upper bound (inclusive) of each EQ digit
const DIGIT_MAX: [u8; 6] = [2, 1, 2, 2, 2, 1];

/// Six-digit equivalence class key, EQ1 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroVector {
    pub eq1: u8,
    pub eq2: u8,
    pub eq3: u8,
    pub eq4: u8,
    pub eq5: u8,
    pub eq6: u8,
}

impl MacroVector {
    pub fn new(eq: [u8; 6]) -> Self {
        Self {
            eq1: eq[0],
            eq2: eq[1],
            eq3: eq[2],
            eq4: eq[3],
            eq5: eq[4],
            eq6: eq[5],
        }
    }

    pub fn as_array(&self) -> [u8; 6] {
        [self.eq1, self.eq2, self.eq3, self.eq4, self.eq5, self.eq6]
    }

    /// ASCII digits, the key format of the lookup table
    pub fn digits(&self) -> [u8; 6] {
        self.as_array().map(|digit| b'0' + digit)
    }

    /// Copy with digit `index` (0 = EQ1) one step less severe.
    ///
    /// `None` when `index` names no EQ digit. The result may fall outside the
    /// valid range; such keys are simply absent from the lookup table.
    pub fn bumped(&self, index: usize) -> Option<Self> {
        let mut eq = self.as_array();
        let digit = eq.get_mut(index)?;
        *digit = digit.checked_add(1)?;
        Some(Self::new(eq))
    }

    /// Whether every digit lies within its dimension's range
    pub fn is_in_range(&self) -> bool {
        self.as_array()
            .iter()
            .zip(DIGIT_MAX.iter())
            .all(|(digit, max)| digit <= max)
    }
}

impl fmt::Display for MacroVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.as_array() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Error parsing a MacroVector key from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid macro vector '{0}': expected six decimal digits")]
pub struct InvalidMacroVector(pub String);

impl FromStr for MacroVector {
    type Err = InvalidMacroVector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 6 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidMacroVector(s.to_string()));
        }
        let mut eq = [0u8; 6];
        for (slot, byte) in eq.iter_mut().zip(bytes) {
            *slot = byte - b'0';
        }
        Ok(Self::new(eq))
    }
}

/// Classify effective metrics into their MacroVector.
pub fn classify(metrics: &EffectiveMetrics) -> MacroVector {
    MacroVector {
        eq1: eq1(metrics),
        eq2: eq2(metrics),
        eq3: eq3(metrics),
        eq4: eq4(metrics),
        eq5: eq5(metrics),
        eq6: eq6(metrics),
    }
}

/// Exploitability through attack vector, privileges and user interaction.
fn eq1(m: &EffectiveMetrics) -> u8 {
    let av_network = m.av == AttackVector::Network;
    let pr_none = m.pr == PrivilegesRequired::None;
    let ui_none = m.ui == UserInteraction::None;

    if av_network && pr_none && ui_none {
        0
    } else if (av_network || pr_none || ui_none) && m.av != AttackVector::Physical {
        1
    } else {
        2
    }
}

fn eq2(m: &EffectiveMetrics) -> u8 {
    if m.ac == AttackComplexity::Low && m.at == AttackRequirements::None {
        0
    } else {
        1
    }
}

/// Vulnerable-system impact.
fn eq3(m: &EffectiveMetrics) -> u8 {
    let vc_high = m.vc == Impact::High;
    let vi_high = m.vi == Impact::High;

    if vc_high && vi_high {
        0
    } else if vc_high || vi_high || m.va == Impact::High {
        1
    } else {
        2
    }
}

/// Subsequent-system impact. Safety on MSI or MSA outranks everything.
fn eq4(m: &EffectiveMetrics) -> u8 {
    if m.msi_safety || m.msa_safety {
        0
    } else if m.sc == Impact::High || m.si == Impact::High || m.sa == Impact::High {
        1
    } else {
        2
    }
}

fn eq5(m: &EffectiveMetrics) -> u8 {
    match m.e {
        ExploitMaturity::Attacked | ExploitMaturity::NotDefined => 0,
        ExploitMaturity::ProofOfConcept => 1,
        ExploitMaturity::Unreported => 2,
    }
}

/// Security requirements paired with high vulnerable-system impact.
fn eq6(m: &EffectiveMetrics) -> u8 {
    let high = |requirement: Requirement, impact: Impact| {
        requirement == Requirement::High && impact == Impact::High
    };

    if high(m.cr, m.vc) || high(m.ir, m.vi) || high(m.ar, m.va) {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvss4::Cvss4;
    use crate::resolver::resolve;

    fn classify_vector(vector: &str) -> MacroVector {
        let cvss: Cvss4 = vector.parse().unwrap();
        classify(&resolve(&cvss))
    }

    #[test]
    fn test_macro_vector_display_and_parse() {
        let mv = MacroVector::new([1, 0, 2, 1, 0, 1]);
        assert_eq!(mv.to_string(), "102101");
        assert_eq!("102101".parse::<MacroVector>().unwrap(), mv);
        assert_eq!(&mv.digits(), b"102101");
    }

    #[test]
    fn test_macro_vector_parse_rejects_garbage() {
        assert!("10210".parse::<MacroVector>().is_err());
        assert!("10210a".parse::<MacroVector>().is_err());
        assert!("1021011".parse::<MacroVector>().is_err());
    }

    #[test]
    fn test_bumped_may_leave_range() {
        let mv = MacroVector::new([2, 1, 2, 2, 2, 1]);
        assert!(mv.is_in_range());
        let bumped = mv.bumped(0).unwrap();
        assert_eq!(bumped.eq1, 3);
        assert!(!bumped.is_in_range());
        assert_eq!(mv.bumped(5).unwrap().eq6, 2);
    }

    #[test]
    fn test_bumped_rejects_unknown_dimension() {
        let mv = MacroVector::new([0, 0, 0, 0, 0, 0]);
        assert_eq!(mv.bumped(6), None);
        assert_eq!(mv.bumped(usize::MAX), None);
        assert_eq!(MacroVector::new([255, 0, 0, 0, 0, 0]).bumped(0), None);
    }

    #[test]
    fn test_highest_severity_vector() {
        let mv = classify_vector("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:H");
        assert_eq!(mv.to_string(), "000100");
    }

    #[test]
    fn test_eq1_partial_network_reachability() {
        let mv = classify_vector("CVSS:4.0/AV:N/AC:H/AT:N/PR:L/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:H");
        assert_eq!(mv.eq1, 1);
        assert_eq!(mv.eq2, 1);

        // Physical access always lands in the least severe class
        let mv = classify_vector("CVSS:4.0/AV:P/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N");
        assert_eq!(mv.eq1, 2);

        let mv = classify_vector("CVSS:4.0/AV:L/AC:L/AT:N/PR:L/UI:A/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N");
        assert_eq!(mv.eq1, 2);
    }

    #[test]
    fn test_eq3_and_eq6_follow_impacts_and_requirements() {
        let mv = classify_vector("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:L/VA:N/SC:N/SI:N/SA:N");
        assert_eq!((mv.eq3, mv.eq6), (1, 0));

        let mv = classify_vector(
            "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:L/VA:N/SC:N/SI:N/SA:N/CR:M",
        );
        assert_eq!((mv.eq3, mv.eq6), (1, 1));

        let mv = classify_vector("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:L/VI:L/VA:L/SC:N/SI:N/SA:N");
        assert_eq!((mv.eq3, mv.eq6), (2, 1));
    }

    #[test]
    fn test_eq4_safety_override() {
        let mv = classify_vector(
            "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:N/SC:N/SI:N/SA:N/MSA:S",
        );
        assert_eq!(mv.eq4, 0);
        assert_eq!(mv.to_string(), "002001");

        let mv = classify_vector("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:N/SC:L/SI:H/SA:N");
        assert_eq!(mv.eq4, 1);
    }

    #[test]
    fn test_eq5_exploit_maturity() {
        let base = "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N";
        assert_eq!(classify_vector(base).eq5, 0);
        assert_eq!(classify_vector(&format!("{base}/E:A")).eq5, 0);
        assert_eq!(classify_vector(&format!("{base}/E:P")).eq5, 1);
        assert_eq!(classify_vector(&format!("{base}/E:U")).eq5, 2);
    }
}
