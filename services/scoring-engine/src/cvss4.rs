//! CVSS v4.0 vector record
//!
//! `Cvss4` is an immutable value built from four metric groups. It parses
//! from and serializes to the canonical `CVSS:4.0/...` vector string.

use std::fmt;
use std::str::FromStr;

use cvss_types::errors::MalformedVectorError;
use cvss_types::metrics::{
    AttackComplexity, AttackRequirements, AttackVector, Automatable, ExploitMaturity, Impact,
    Modified, ModifiedSubsequentImpact, PrivilegesRequired, ProviderUrgency, Recovery,
    Requirement, ResponseEffort, Safety, UserInteraction, ValueDensity, WireValue,
};
use cvss_types::score::Score;
use cvss_types::vector::{tokenize, MetricTokens, VectorGrammar};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::{classify, MacroVector};
use crate::engine::assemble;
use crate::resolver::{resolve, EffectiveMetrics};

pub const CVSS_V4_PREFIX: &str = "CVSS:4.0";

/// Wire value of every undefined optional metric
const NOT_DEFINED: &str = "X";

/// Mandatory metric codes in canonical order
pub const MANDATORY_METRICS: [&str; 11] =
    ["AV", "AC", "AT", "PR", "UI", "VC", "VI", "VA", "SC", "SI", "SA"];

/// Optional metric codes in canonical order: threat, environmental, supplemental
pub const OPTIONAL_METRICS: [&str; 21] = [
    "E", "CR", "IR", "AR", "MAV", "MAC", "MAT", "MPR", "MUI", "MVC", "MVI", "MVA", "MSC", "MSI",
    "MSA", "S", "AU", "R", "V", "RE", "U",
];

const GRAMMAR: VectorGrammar = VectorGrammar {
    prefix: CVSS_V4_PREFIX,
    mandatory: &MANDATORY_METRICS,
    optional: &OPTIONAL_METRICS,
};

/// Base metrics (all mandatory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseMetrics {
    pub av: AttackVector,
    pub ac: AttackComplexity,
    pub at: AttackRequirements,
    pub pr: PrivilegesRequired,
    pub ui: UserInteraction,
    pub vc: Impact,
    pub vi: Impact,
    pub va: Impact,
    pub sc: Impact,
    pub si: Impact,
    pub sa: Impact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ThreatMetrics {
    pub e: ExploitMaturity,
}

/// Security requirements and modified base metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EnvironmentalMetrics {
    pub cr: Requirement,
    pub ir: Requirement,
    pub ar: Requirement,
    pub mav: Modified<AttackVector>,
    pub mac: Modified<AttackComplexity>,
    pub mat: Modified<AttackRequirements>,
    pub mpr: Modified<PrivilegesRequired>,
    pub mui: Modified<UserInteraction>,
    pub mvc: Modified<Impact>,
    pub mvi: Modified<Impact>,
    pub mva: Modified<Impact>,
    pub msc: Modified<Impact>,
    pub msi: ModifiedSubsequentImpact,
    pub msa: ModifiedSubsequentImpact,
}

impl EnvironmentalMetrics {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Supplemental metrics. Carried in the vector, never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SupplementalMetrics {
    pub s: Safety,
    pub au: Automatable,
    pub r: Recovery,
    pub v: ValueDensity,
    pub re: ResponseEffort,
    pub u: ProviderUrgency,
}

/// Which metric groups contributed to a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nomenclature {
    #[serde(rename = "CVSS-B")]
    Base,
    #[serde(rename = "CVSS-BT")]
    BaseThreat,
    #[serde(rename = "CVSS-BE")]
    BaseEnvironmental,
    #[serde(rename = "CVSS-BTE")]
    BaseThreatEnvironmental,
}

impl Nomenclature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Nomenclature::Base => "CVSS-B",
            Nomenclature::BaseThreat => "CVSS-BT",
            Nomenclature::BaseEnvironmental => "CVSS-BE",
            Nomenclature::BaseThreatEnvironmental => "CVSS-BTE",
        }
    }
}

impl fmt::Display for Nomenclature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete CVSS v4.0 vector
///
/// Construct with [`Cvss4::parse`] or a named-field literal:
///
/// ```ignore
/// let cvss = Cvss4 {
///     base: BaseMetrics { av: AttackVector::Network, /* ... */ },
///     threat: ThreatMetrics::default(),
///     environmental: EnvironmentalMetrics::default(),
///     supplemental: SupplementalMetrics::default(),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cvss4 {
    pub base: BaseMetrics,
    pub threat: ThreatMetrics,
    pub environmental: EnvironmentalMetrics,
    pub supplemental: SupplementalMetrics,
}

impl Cvss4 {
    /// Vector with only base metrics set
    pub fn from_base(base: BaseMetrics) -> Self {
        Self {
            base,
            threat: ThreatMetrics::default(),
            environmental: EnvironmentalMetrics::default(),
            supplemental: SupplementalMetrics::default(),
        }
    }

    /// Parse a `CVSS:4.0/...` vector string.
    ///
    /// Metrics may appear in any order. Either the whole vector parses or an
    /// error describing the first problem is returned.
    pub fn parse(vector: &str) -> Result<Self, MalformedVectorError> {
        Self::parse_tokens(vector).inspect_err(|err| {
            debug!(error = %err, "Rejected CVSS v4.0 vector");
        })
    }

    fn parse_tokens(vector: &str) -> Result<Self, MalformedVectorError> {
        let tokens = tokenize(vector, &GRAMMAR)?;

        let base = BaseMetrics {
            av: required(&tokens, "AV")?,
            ac: required(&tokens, "AC")?,
            at: required(&tokens, "AT")?,
            pr: required(&tokens, "PR")?,
            ui: required(&tokens, "UI")?,
            vc: required(&tokens, "VC")?,
            vi: required(&tokens, "VI")?,
            va: required(&tokens, "VA")?,
            sc: required(&tokens, "SC")?,
            si: required(&tokens, "SI")?,
            sa: required(&tokens, "SA")?,
        };

        let threat = ThreatMetrics {
            e: optional(&tokens, "E")?,
        };

        let environmental = EnvironmentalMetrics {
            cr: optional(&tokens, "CR")?,
            ir: optional(&tokens, "IR")?,
            ar: optional(&tokens, "AR")?,
            mav: optional(&tokens, "MAV")?,
            mac: optional(&tokens, "MAC")?,
            mat: optional(&tokens, "MAT")?,
            mpr: optional(&tokens, "MPR")?,
            mui: optional(&tokens, "MUI")?,
            mvc: optional(&tokens, "MVC")?,
            mvi: optional(&tokens, "MVI")?,
            mva: optional(&tokens, "MVA")?,
            msc: optional(&tokens, "MSC")?,
            msi: optional(&tokens, "MSI")?,
            msa: optional(&tokens, "MSA")?,
        };

        let supplemental = SupplementalMetrics {
            s: optional(&tokens, "S")?,
            au: optional(&tokens, "AU")?,
            r: optional(&tokens, "R")?,
            v: optional(&tokens, "V")?,
            re: optional(&tokens, "RE")?,
            u: optional(&tokens, "U")?,
        };

        Ok(Self {
            base,
            threat,
            environmental,
            supplemental,
        })
    }

    /// Canonical vector string.
    ///
    /// Mandatory metrics always appear; optional metrics only when defined.
    /// Both follow the fixed CVSS v4.0 order.
    pub fn vector(&self) -> String {
        let mut vector = String::from(CVSS_V4_PREFIX);
        for (code, value) in self.segments() {
            vector.push('/');
            vector.push_str(code);
            vector.push(':');
            vector.push_str(value);
        }
        vector
    }

    fn segments(&self) -> Vec<(&'static str, &'static str)> {
        let b = &self.base;
        let t = &self.threat;
        let env = &self.environmental;
        let sup = &self.supplemental;

        let mandatory = [
            ("AV", b.av.wire()),
            ("AC", b.ac.wire()),
            ("AT", b.at.wire()),
            ("PR", b.pr.wire()),
            ("UI", b.ui.wire()),
            ("VC", b.vc.wire()),
            ("VI", b.vi.wire()),
            ("VA", b.va.wire()),
            ("SC", b.sc.wire()),
            ("SI", b.si.wire()),
            ("SA", b.sa.wire()),
        ];

        let optional = [
            ("E", t.e.wire()),
            ("CR", env.cr.wire()),
            ("IR", env.ir.wire()),
            ("AR", env.ar.wire()),
            ("MAV", env.mav.wire()),
            ("MAC", env.mac.wire()),
            ("MAT", env.mat.wire()),
            ("MPR", env.mpr.wire()),
            ("MUI", env.mui.wire()),
            ("MVC", env.mvc.wire()),
            ("MVI", env.mvi.wire()),
            ("MVA", env.mva.wire()),
            ("MSC", env.msc.wire()),
            ("MSI", env.msi.wire()),
            ("MSA", env.msa.wire()),
            ("S", sup.s.wire()),
            ("AU", sup.au.wire()),
            ("R", sup.r.wire()),
            ("V", sup.v.wire()),
            ("RE", sup.re.wire()),
            ("U", sup.u.wire()),
        ];

        mandatory
            .into_iter()
            .chain(optional.into_iter().filter(|(_, value)| *value != NOT_DEFINED))
            .collect()
    }

    /// Score this vector. Never fails on a parsed vector.
    pub fn calculate_score(&self) -> Score {
        assemble(&self.effective_metrics())
    }

    pub fn effective_metrics(&self) -> EffectiveMetrics {
        resolve(self)
    }

    /// Equivalence class used to look up the baseline score
    pub fn macro_vector(&self) -> MacroVector {
        classify(&self.effective_metrics())
    }

    pub fn nomenclature(&self) -> Nomenclature {
        let threat = self.threat.e != ExploitMaturity::NotDefined;
        let environmental = !self.environmental.is_empty();

        match (threat, environmental) {
            (false, false) => Nomenclature::Base,
            (true, false) => Nomenclature::BaseThreat,
            (false, true) => Nomenclature::BaseEnvironmental,
            (true, true) => Nomenclature::BaseThreatEnvironmental,
        }
    }
}

fn convert<T: WireValue>(code: &str, raw: &str) -> Result<T, MalformedVectorError> {
    T::from_wire(raw).ok_or_else(|| MalformedVectorError::InvalidValue {
        code: code.to_string(),
        value: raw.to_string(),
    })
}

fn required<T: WireValue>(tokens: &MetricTokens<'_>, code: &str) -> Result<T, MalformedVectorError> {
    let raw = tokens
        .get(code)
        .ok_or_else(|| MalformedVectorError::MissingMandatory { code: code.to_string() })?;
    convert(code, raw)
}

fn optional<T: WireValue + Default>(
    tokens: &MetricTokens<'_>,
    code: &str,
) -> Result<T, MalformedVectorError> {
    match tokens.get(code) {
        Some(raw) => convert(code, raw),
        None => Ok(T::default()),
    }
}

impl fmt::Display for Cvss4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.vector())
    }
}

impl FromStr for Cvss4 {
    type Err = MalformedVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cvss4 {
    type Error = MalformedVectorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cvss4> for String {
    fn from(cvss: Cvss4) -> Self {
        cvss.vector()
    }
}
