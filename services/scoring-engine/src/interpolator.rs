//! Severity-distance interpolation
//!
//! Refines the MacroVector baseline into a continuous score. For every
//! dimension that has a less severe neighbor class in the lookup table, the
//! score gap to that neighbor is scaled by how far the effective metrics sit
//! below the class exemplar. The mean of those corrections is subtracted from
//! the baseline.
//!
//! Severity levels are kept in tenths so distances are exact integers.

use cvss_types::metrics::{
    AttackComplexity, AttackRequirements, AttackVector, ExploitMaturity, Impact,
    PrivilegesRequired, Requirement, UserInteraction,
};
use tracing::trace;

use crate::classifier::MacroVector;
use crate::resolver::EffectiveMetrics;
use crate::tables::macrovector;
use crate::tables::max_composed::{
    self, Eq1Exemplar, Eq2Exemplar, Eq3Eq6Exemplar, Eq4Exemplar, Eq5Exemplar,
};
use crate::tables::max_severity;

// ── Severity levels (tenths, 0 = most severe) ───────────────────────

fn av_level(value: AttackVector) -> i32 {
    match value {
        AttackVector::Network => 0,
        AttackVector::Adjacent => 1,
        AttackVector::Local => 2,
        AttackVector::Physical => 3,
    }
}

fn pr_level(value: PrivilegesRequired) -> i32 {
    match value {
        PrivilegesRequired::None => 0,
        PrivilegesRequired::Low => 1,
        PrivilegesRequired::High => 2,
    }
}

fn ui_level(value: UserInteraction) -> i32 {
    match value {
        UserInteraction::None => 0,
        UserInteraction::Passive => 1,
        UserInteraction::Active => 2,
    }
}

fn ac_level(value: AttackComplexity) -> i32 {
    match value {
        AttackComplexity::Low => 0,
        AttackComplexity::High => 1,
    }
}

fn at_level(value: AttackRequirements) -> i32 {
    match value {
        AttackRequirements::None => 0,
        AttackRequirements::Present => 1,
    }
}

/// VC, VI, VA
fn vulnerable_level(value: Impact) -> i32 {
    match value {
        Impact::High => 0,
        Impact::Low => 1,
        Impact::None => 2,
    }
}

/// SC, SI, SA. Safety (SI/SA only) sits one step above High.
fn subsequent_level(value: Impact, safety: bool) -> i32 {
    if safety {
        return 0;
    }
    match value {
        Impact::High => 1,
        Impact::Low => 2,
        Impact::None => 3,
    }
}

fn requirement_level(value: Requirement) -> i32 {
    match value {
        Requirement::High | Requirement::NotDefined => 0,
        Requirement::Medium => 1,
        Requirement::Low => 2,
    }
}

fn exploit_level(value: ExploitMaturity) -> i32 {
    match value {
        ExploitMaturity::Attacked | ExploitMaturity::NotDefined => 0,
        ExploitMaturity::ProofOfConcept => 1,
        ExploitMaturity::Unreported => 2,
    }
}

// ── Exemplar distances ──────────────────────────────────────────────

/// Signed distance of effective metrics from one exemplar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Distance {
    /// No component of the effective metrics is more severe than the exemplar
    dominated: bool,
    total: i32,
}

/// Fold per-component `effective level - exemplar level` values.
fn measure<const N: usize>(components: [i32; N]) -> Distance {
    Distance {
        dominated: components.iter().all(|d| *d >= 0),
        total: components.iter().sum(),
    }
}

/// A max-composed exemplar that effective metrics can be measured against.
trait Exemplar {
    fn distance(&self, m: &EffectiveMetrics) -> Distance;
}

impl Exemplar for Eq1Exemplar {
    fn distance(&self, m: &EffectiveMetrics) -> Distance {
        measure([
            av_level(m.av) - av_level(self.av),
            pr_level(m.pr) - pr_level(self.pr),
            ui_level(m.ui) - ui_level(self.ui),
        ])
    }
}

impl Exemplar for Eq2Exemplar {
    fn distance(&self, m: &EffectiveMetrics) -> Distance {
        measure([
            ac_level(m.ac) - ac_level(self.ac),
            at_level(m.at) - at_level(self.at),
        ])
    }
}

impl Exemplar for Eq3Eq6Exemplar {
    fn distance(&self, m: &EffectiveMetrics) -> Distance {
        measure([
            vulnerable_level(m.vc) - vulnerable_level(self.vc),
            vulnerable_level(m.vi) - vulnerable_level(self.vi),
            vulnerable_level(m.va) - vulnerable_level(self.va),
            requirement_level(m.cr) - requirement_level(self.cr),
            requirement_level(m.ir) - requirement_level(self.ir),
            requirement_level(m.ar) - requirement_level(self.ar),
        ])
    }
}

impl Exemplar for Eq4Exemplar {
    fn distance(&self, m: &EffectiveMetrics) -> Distance {
        measure([
            subsequent_level(m.sc, false) - subsequent_level(self.sc, false),
            subsequent_level(m.si, m.msi_safety) - subsequent_level(self.si, self.safety),
            subsequent_level(m.sa, m.msa_safety) - subsequent_level(self.sa, self.safety),
        ])
    }
}

impl Exemplar for Eq5Exemplar {
    fn distance(&self, m: &EffectiveMetrics) -> Distance {
        measure([exploit_level(m.e) - exploit_level(self.e)])
    }
}

/// Severity distance to the dominant exemplar of a class.
///
/// The dominant exemplar is the first candidate no component of which is
/// less severe than the effective metrics; if there is none, the first
/// candidate is used. `None` when the class has no exemplars.
fn severity_distance<E: Exemplar>(candidates: &[E], m: &EffectiveMetrics) -> Option<i32> {
    let first = candidates.first()?.distance(m);
    let dominant = candidates
        .iter()
        .map(|candidate| candidate.distance(m))
        .find(|distance| distance.dominated)
        .unwrap_or(first);
    Some(dominant.total)
}

// ── Neighbor classes ────────────────────────────────────────────────

/// Baseline of the class one step less severe on digit `index`.
fn neighbor_score(mv: &MacroVector, index: usize) -> Option<f64> {
    mv.bumped(index).and_then(|neighbor| macrovector::lookup(&neighbor))
}

/// Score of the next less severe class for EQ3/EQ6.
///
/// Both digits index one axis. From `(0, 0)` either digit can step, and the
/// higher scoring of the two present neighbors wins.
fn eq3_eq6_neighbor(mv: &MacroVector) -> Option<f64> {
    let step_eq3 = || neighbor_score(mv, 2);
    let step_eq6 = || neighbor_score(mv, 5);

    match (mv.eq3, mv.eq6) {
        (0, 0) => match (step_eq6(), step_eq3()) {
            (Some(left), Some(right)) => Some(left.max(right)),
            (left, right) => left.or(right),
        },
        (0, 1) | (1, 1) => step_eq3(),
        (1, 0) => step_eq6(),
        _ => None,
    }
}

/// One interpolation dimension after lookups.
struct Dimension {
    name: &'static str,
    neighbor: Option<f64>,
    distance: Option<i32>,
    depth: Option<u8>,
}

fn dimensions(mv: &MacroVector, m: &EffectiveMetrics) -> [Dimension; 5] {
    [
        Dimension {
            name: "eq1",
            neighbor: neighbor_score(mv, 0),
            distance: severity_distance(max_composed::eq1(mv.eq1), m),
            depth: max_severity::eq1(mv.eq1),
        },
        Dimension {
            name: "eq2",
            neighbor: neighbor_score(mv, 1),
            distance: severity_distance(max_composed::eq2(mv.eq2), m),
            depth: max_severity::eq2(mv.eq2),
        },
        Dimension {
            name: "eq3eq6",
            neighbor: eq3_eq6_neighbor(mv),
            distance: severity_distance(max_composed::eq3_eq6(mv.eq3, mv.eq6), m),
            depth: max_severity::eq3_eq6(mv.eq3, mv.eq6),
        },
        Dimension {
            name: "eq4",
            neighbor: neighbor_score(mv, 3),
            distance: severity_distance(max_composed::eq4(mv.eq4), m),
            depth: max_severity::eq4(mv.eq4),
        },
        Dimension {
            name: "eq5",
            neighbor: neighbor_score(mv, 4),
            distance: severity_distance(max_composed::eq5(mv.eq5), m),
            depth: max_severity::eq5(mv.eq5),
        },
    ]
}

/// Interpolated, unrounded score for `mv` given its `baseline`.
pub fn interpolate(mv: &MacroVector, baseline: f64, m: &EffectiveMetrics) -> f64 {
    let mut total = 0.0;
    let mut count = 0u32;

    for dimension in dimensions(mv, m) {
        let Some(neighbor) = dimension.neighbor else {
            trace!(dimension = dimension.name, "No less severe neighbor class");
            continue;
        };

        let available = baseline - neighbor;
        let proportion = match (dimension.distance, dimension.depth) {
            (Some(distance), Some(depth)) if depth > 0 => f64::from(distance) / f64::from(depth),
            _ => 0.0,
        };

        trace!(
            dimension = dimension.name,
            available,
            proportion,
            "Severity distance"
        );

        total += available * proportion;
        count += 1;
    }

    let mean = if count == 0 { 0.0 } else { total / f64::from(count) };
    baseline - mean
}
