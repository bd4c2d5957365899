//! Effective metric resolution
//!
//! Applies environmental overrides on top of the submitted base metrics and
//! fills in the CVSS defaults for threat and requirement metrics.

use cvss_types::metrics::{
    AttackComplexity, AttackRequirements, AttackVector, ExploitMaturity, Impact,
    ModifiedSubsequentImpact, PrivilegesRequired, Requirement, UserInteraction,
};
use serde::Serialize;

use crate::cvss4::Cvss4;

/// Metric values actually used for scoring.
///
/// Invariant: no field holds a `NotDefined` value. Safety on MSI/MSA is
/// carried in `msi_safety`/`msa_safety`; `si`/`sa` then keep the base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EffectiveMetrics {
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
    pub msi_safety: bool,
    pub msa_safety: bool,
    pub cr: Requirement,
    pub ir: Requirement,
    pub ar: Requirement,
    pub e: ExploitMaturity,
}

impl EffectiveMetrics {
    /// No impact on any system and no safety override
    pub fn has_no_impact(&self) -> bool {
        [self.vc, self.vi, self.va, self.sc, self.si, self.sa]
            .iter()
            .all(|impact| *impact == Impact::None)
            && !self.msi_safety
            && !self.msa_safety
    }
}

/// Resolve the effective metrics of a parsed vector.
pub fn resolve(cvss: &Cvss4) -> EffectiveMetrics {
    let base = &cvss.base;
    let env = &cvss.environmental;

    EffectiveMetrics {
        av: env.mav.resolve(base.av),
        ac: env.mac.resolve(base.ac),
        at: env.mat.resolve(base.at),
        pr: env.mpr.resolve(base.pr),
        ui: env.mui.resolve(base.ui),
        vc: env.mvc.resolve(base.vc),
        vi: env.mvi.resolve(base.vi),
        va: env.mva.resolve(base.va),
        sc: env.msc.resolve(base.sc),
        si: subsequent(env.msi, base.si),
        sa: subsequent(env.msa, base.sa),
        msi_safety: env.msi == ModifiedSubsequentImpact::Safety,
        msa_safety: env.msa == ModifiedSubsequentImpact::Safety,
        cr: requirement(env.cr),
        ir: requirement(env.ir),
        ar: requirement(env.ar),
        e: exploit_maturity(cvss.threat.e),
    }
}

fn subsequent(modified: ModifiedSubsequentImpact, base: Impact) -> Impact {
    modified.as_impact().unwrap_or(base)
}

/// Undefined requirements count as High.
fn requirement(value: Requirement) -> Requirement {
    match value {
        Requirement::NotDefined => Requirement::High,
        other => other,
    }
}

/// Undefined exploit maturity assumes the worst case (attacked).
fn exploit_maturity(value: ExploitMaturity) -> ExploitMaturity {
    match value {
        ExploitMaturity::NotDefined => ExploitMaturity::Attacked,
        other => other,
    }
}
