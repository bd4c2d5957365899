//! Max-composed exemplars
//!
//! For each equivalence class value, the most severe metric combinations that
//! still belong to it. Candidates are listed in preference order; the
//! interpolator picks the first one the effective metrics do not exceed.

use cvss_types::metrics::{
    AttackComplexity as AC, AttackRequirements as AT, AttackVector as AV, ExploitMaturity,
    Impact, PrivilegesRequired as PR, Requirement as Req, UserInteraction as UI,
};
use cvss_types::metrics::Impact::{High as H, Low as L};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eq1Exemplar {
    pub av: AV,
    pub pr: PR,
    pub ui: UI,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eq2Exemplar {
    pub ac: AC,
    pub at: AT,
}

/// EQ3 and EQ6 share one exemplar: impacts plus their requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eq3Eq6Exemplar {
    pub vc: Impact,
    pub vi: Impact,
    pub va: Impact,
    pub cr: Req,
    pub ir: Req,
    pub ar: Req,
}

/// `safety` marks SI and SA at the Safety level; `si`/`sa` are then unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eq4Exemplar {
    pub sc: Impact,
    pub si: Impact,
    pub sa: Impact,
    pub safety: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eq5Exemplar {
    pub e: ExploitMaturity,
}

const fn eq1_ex(av: AV, pr: PR, ui: UI) -> Eq1Exemplar {
    Eq1Exemplar { av, pr, ui }
}

const fn eq3_ex(vc: Impact, vi: Impact, va: Impact, cr: Req, ir: Req, ar: Req) -> Eq3Eq6Exemplar {
    Eq3Eq6Exemplar { vc, vi, va, cr, ir, ar }
}

static EQ1_0: [Eq1Exemplar; 1] = [eq1_ex(AV::Network, PR::None, UI::None)];
static EQ1_1: [Eq1Exemplar; 3] = [
    eq1_ex(AV::Adjacent, PR::None, UI::None),
    eq1_ex(AV::Network, PR::Low, UI::None),
    eq1_ex(AV::Network, PR::None, UI::Passive),
];
static EQ1_2: [Eq1Exemplar; 2] = [
    eq1_ex(AV::Physical, PR::None, UI::None),
    eq1_ex(AV::Adjacent, PR::Low, UI::Passive),
];

static EQ2_0: [Eq2Exemplar; 1] = [Eq2Exemplar { ac: AC::Low, at: AT::None }];
static EQ2_1: [Eq2Exemplar; 2] = [
    Eq2Exemplar { ac: AC::High, at: AT::None },
    Eq2Exemplar { ac: AC::Low, at: AT::Present },
];

static EQ3_0_EQ6_0: [Eq3Eq6Exemplar; 1] = [eq3_ex(H, H, H, Req::High, Req::High, Req::High)];
static EQ3_0_EQ6_1: [Eq3Eq6Exemplar; 2] = [
    eq3_ex(H, H, L, Req::Medium, Req::Medium, Req::High),
    eq3_ex(H, H, H, Req::Medium, Req::Medium, Req::Medium),
];
static EQ3_1_EQ6_0: [Eq3Eq6Exemplar; 2] = [
    eq3_ex(L, H, H, Req::High, Req::High, Req::High),
    eq3_ex(H, L, H, Req::High, Req::High, Req::High),
];
static EQ3_1_EQ6_1: [Eq3Eq6Exemplar; 5] = [
    eq3_ex(L, H, H, Req::High, Req::Medium, Req::Medium),
    eq3_ex(L, H, L, Req::High, Req::Medium, Req::High),
    eq3_ex(H, L, H, Req::Medium, Req::High, Req::Medium),
    eq3_ex(H, L, L, Req::Medium, Req::High, Req::High),
    eq3_ex(L, L, H, Req::High, Req::High, Req::Medium),
];
static EQ3_2_EQ6_1: [Eq3Eq6Exemplar; 1] = [eq3_ex(L, L, L, Req::High, Req::High, Req::High)];

static EQ4_0: [Eq4Exemplar; 1] = [Eq4Exemplar { sc: H, si: H, sa: H, safety: true }];
static EQ4_1: [Eq4Exemplar; 1] = [Eq4Exemplar { sc: H, si: H, sa: H, safety: false }];
static EQ4_2: [Eq4Exemplar; 1] = [Eq4Exemplar { sc: L, si: L, sa: L, safety: false }];

static EQ5_0: [Eq5Exemplar; 1] = [Eq5Exemplar { e: ExploitMaturity::Attacked }];
static EQ5_1: [Eq5Exemplar; 1] = [Eq5Exemplar { e: ExploitMaturity::ProofOfConcept }];
static EQ5_2: [Eq5Exemplar; 1] = [Eq5Exemplar { e: ExploitMaturity::Unreported }];

pub fn eq1(value: u8) -> &'static [Eq1Exemplar] {
    match value {
        0 => &EQ1_0,
        1 => &EQ1_1,
        2 => &EQ1_2,
        _ => &[],
    }
}

pub fn eq2(value: u8) -> &'static [Eq2Exemplar] {
    match value {
        0 => &EQ2_0,
        1 => &EQ2_1,
        _ => &[],
    }
}

/// Exemplars for the coupled EQ3/EQ6 pair. Empty for `(2, 0)`, which no
/// vector can produce.
pub fn eq3_eq6(eq3: u8, eq6: u8) -> &'static [Eq3Eq6Exemplar] {
    match (eq3, eq6) {
        (0, 0) => &EQ3_0_EQ6_0,
        (0, 1) => &EQ3_0_EQ6_1,
        (1, 0) => &EQ3_1_EQ6_0,
        (1, 1) => &EQ3_1_EQ6_1,
        (2, 1) => &EQ3_2_EQ6_1,
        _ => &[],
    }
}

pub fn eq4(value: u8) -> &'static [Eq4Exemplar] {
    match value {
        0 => &EQ4_0,
        1 => &EQ4_1,
        2 => &EQ4_2,
        _ => &[],
    }
}

pub fn eq5(value: u8) -> &'static [Eq5Exemplar] {
    match value {
        0 => &EQ5_0,
        1 => &EQ5_1,
        2 => &EQ5_2,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_reachable_class_has_exemplars() {
        for value in 0..=2 {
            assert!(!eq1(value).is_empty());
            assert!(!eq4(value).is_empty());
            assert!(!eq5(value).is_empty());
        }
        for value in 0..=1 {
            assert!(!eq2(value).is_empty());
        }
        for (eq3, eq6) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 1)] {
            assert!(!eq3_eq6(eq3, eq6).is_empty(), "({eq3}, {eq6})");
        }
    }

    #[test]
    fn test_unreachable_classes_are_empty() {
        assert!(eq1(3).is_empty());
        assert!(eq2(2).is_empty());
        assert!(eq3_eq6(2, 0).is_empty());
        assert!(eq3_eq6(3, 2).is_empty());
    }

    #[test]
    fn test_exemplar_order_is_preserved() {
        assert_eq!(eq1(1)[0], eq1_ex(AV::Adjacent, PR::None, UI::None));
        assert_eq!(eq1(2)[1], eq1_ex(AV::Adjacent, PR::Low, UI::Passive));
        assert_eq!(eq3_eq6(1, 1).len(), 5);
        assert!(eq4(0)[0].safety);
    }
}
