//! CVSS v4.0 metric definitions
//!
//! Every metric is a closed enumeration with a wire code. Base metrics are
//! mandatory and have no `NotDefined` value; threat, environmental and
//! supplemental metrics default to `NotDefined` (wire code `X`).

use serde::{Deserialize, Serialize};

/// Conversion between a metric value and its wire code.
pub trait WireValue: Sized + Copy {
    /// Parse a raw vector value. Returns `None` for unknown values.
    fn from_wire(value: &str) -> Option<Self>;

    /// Canonical wire code used when serializing a vector.
    fn wire(&self) -> &'static str;
}

/// Declares a metric enum together with its `WireValue` implementation.
///
/// The first literal after `=>` is the canonical wire code, any literals after
/// `|` are accepted aliases.
macro_rules! metric_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl WireValue for $name {
            fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $( $wire $(| $alias)* => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn wire(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.wire())
            }
        }
    };
}

// ── Base metrics ────────────────────────────────────────────────────

metric_enum! {
    /// Attack Vector (AV / MAV)
    pub enum AttackVector {
        Network => "N",
        Adjacent => "A",
        Local => "L",
        Physical => "P",
    }
}

metric_enum! {
    /// Attack Complexity (AC / MAC)
    pub enum AttackComplexity {
        Low => "L",
        High => "H",
    }
}

metric_enum! {
    /// Attack Requirements (AT / MAT)
    pub enum AttackRequirements {
        None => "N",
        Present => "P",
    }
}

metric_enum! {
    /// Privileges Required (PR / MPR)
    pub enum PrivilegesRequired {
        None => "N",
        Low => "L",
        High => "H",
    }
}

metric_enum! {
    /// User Interaction (UI / MUI)
    pub enum UserInteraction {
        None => "N",
        Passive => "P",
        Active => "A",
    }
}

metric_enum! {
    /// Impact on the vulnerable or a subsequent system
    /// (VC, VI, VA, SC, SI, SA and MVC, MVI, MVA, MSC)
    pub enum Impact {
        High => "H",
        Low => "L",
        None => "N",
    }
}

// ── Environmental metrics ───────────────────────────────────────────

metric_enum! {
    /// Modified subsequent integrity/availability (MSI / MSA).
    ///
    /// `Negligible` is the wire value `N`; `Safety` marks human-safety impact
    /// and only exists on these two modified metrics.
    pub enum ModifiedSubsequentImpact {
        NotDefined => "X",
        Safety => "S",
        High => "H",
        Low => "L",
        Negligible => "N",
    }
}

impl ModifiedSubsequentImpact {
    /// Ordinary impact value, if this override is one.
    pub fn as_impact(&self) -> Option<Impact> {
        match self {
            Self::High => Some(Impact::High),
            Self::Low => Some(Impact::Low),
            Self::Negligible => Some(Impact::None),
            Self::NotDefined | Self::Safety => None,
        }
    }
}

metric_enum! {
    /// Confidentiality/Integrity/Availability requirement (CR, IR, AR)
    pub enum Requirement {
        NotDefined => "X",
        High => "H",
        Medium => "M",
        Low => "L",
    }
}

/// Modified base metric (MAV, MAC, ...): either not defined or an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Modified<T> {
    NotDefined,
    Defined(T),
}

impl<T> Default for Modified<T> {
    fn default() -> Self {
        Modified::NotDefined
    }
}

impl<T: Copy> Modified<T> {
    /// The override if defined, otherwise `base`.
    pub fn resolve(&self, base: T) -> T {
        match self {
            Modified::NotDefined => base,
            Modified::Defined(value) => *value,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Modified::Defined(_))
    }
}

impl<T: WireValue> WireValue for Modified<T> {
    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "X" => Some(Modified::NotDefined),
            other => T::from_wire(other).map(Modified::Defined),
        }
    }

    fn wire(&self) -> &'static str {
        match self {
            Modified::NotDefined => "X",
            Modified::Defined(value) => value.wire(),
        }
    }
}

// ── Threat metrics ──────────────────────────────────────────────────

metric_enum! {
    /// Exploit Maturity (E)
    pub enum ExploitMaturity {
        NotDefined => "X",
        Attacked => "A",
        ProofOfConcept => "P",
        Unreported => "U",
    }
}

// ── Supplemental metrics ────────────────────────────────────────────

metric_enum! {
    /// Safety (S)
    pub enum Safety {
        NotDefined => "X",
        Negligible => "N",
        Present => "P",
    }
}

metric_enum! {
    /// Automatable (AU)
    pub enum Automatable {
        NotDefined => "X",
        No => "N",
        Yes => "Y",
    }
}

metric_enum! {
    /// Recovery (R)
    pub enum Recovery {
        NotDefined => "X",
        Automatic => "A",
        User => "U",
        Irrecoverable => "I",
    }
}

metric_enum! {
    /// Value Density (V)
    pub enum ValueDensity {
        NotDefined => "X",
        Diffuse => "D",
        Concentrated => "C",
    }
}

metric_enum! {
    /// Vulnerability Response Effort (RE)
    pub enum ResponseEffort {
        NotDefined => "X",
        Low => "L",
        Moderate => "M",
        High => "H",
    }
}

metric_enum! {
    /// Provider Urgency (U). Accepts the full word or its first letter.
    pub enum ProviderUrgency {
        NotDefined => "X",
        Clear => "Clear" | "C",
        Green => "Green" | "G",
        Amber => "Amber" | "A",
        Red => "Red" | "R",
    }
}

macro_rules! not_defined_default {
    ($($name:ident),+ $(,)?) => {
        $(
            impl Default for $name {
                fn default() -> Self {
                    Self::NotDefined
                }
            }
        )+
    };
}

not_defined_default!(
    ModifiedSubsequentImpact,
    Requirement,
    ExploitMaturity,
    Safety,
    Automatable,
    Recovery,
    ValueDensity,
    ResponseEffort,
    ProviderUrgency,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes_round_trip_through_match() {
        assert_eq!(AttackVector::from_wire("A"), Some(AttackVector::Adjacent));
        assert_eq!(AttackVector::Physical.wire(), "P");
        assert_eq!(UserInteraction::from_wire("P"), Some(UserInteraction::Passive));
        assert_eq!(AttackVector::from_wire("X"), None);
        assert_eq!(AttackVector::from_wire("n"), None);
    }

    #[test]
    fn test_provider_urgency_accepts_word_or_letter() {
        assert_eq!(ProviderUrgency::from_wire("Amber"), Some(ProviderUrgency::Amber));
        assert_eq!(ProviderUrgency::from_wire("A"), Some(ProviderUrgency::Amber));
        assert_eq!(ProviderUrgency::from_wire("Red"), Some(ProviderUrgency::Red));
        assert_eq!(ProviderUrgency::from_wire("Purple"), None);
        // Canonical form is always the full word
        assert_eq!(ProviderUrgency::Green.wire(), "Green");
    }

    #[test]
    fn test_modified_wraps_base_codes() {
        let mav: Modified<AttackVector> = Modified::from_wire("L").unwrap();
        assert_eq!(mav, Modified::Defined(AttackVector::Local));
        assert_eq!(mav.resolve(AttackVector::Network), AttackVector::Local);

        let unset: Modified<AttackVector> = Modified::from_wire("X").unwrap();
        assert!(!unset.is_defined());
        assert_eq!(unset.resolve(AttackVector::Network), AttackVector::Network);
        assert_eq!(unset.wire(), "X");

        assert!(Modified::<AttackVector>::from_wire("Q").is_none());
    }

    #[test]
    fn test_safety_only_on_modified_subsequent() {
        assert_eq!(
            ModifiedSubsequentImpact::from_wire("S"),
            Some(ModifiedSubsequentImpact::Safety)
        );
        assert_eq!(Impact::from_wire("S"), None);
        assert_eq!(ModifiedSubsequentImpact::Safety.as_impact(), None);
        assert_eq!(ModifiedSubsequentImpact::Negligible.as_impact(), Some(Impact::None));
    }

    #[test]
    fn test_optional_metrics_default_to_not_defined() {
        assert_eq!(ExploitMaturity::default(), ExploitMaturity::NotDefined);
        assert_eq!(Requirement::default().wire(), "X");
        assert_eq!(ProviderUrgency::default().wire(), "X");
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&AttackVector::Network).unwrap();
        assert_eq!(json, "\"N\"");

        let urgency: ProviderUrgency = serde_json::from_str("\"R\"").unwrap();
        assert_eq!(urgency, ProviderUrgency::Red);
    }
}
