//! Score assembly
//!
//! Runs the scoring pipeline on resolved metrics:
//! classify → baseline lookup → interpolate → round.

use cvss_types::score::Score;
use tracing::debug;

use crate::classifier::classify;
use crate::interpolator::interpolate;
use crate::resolver::EffectiveMetrics;
use crate::tables::macrovector;

pub const MAX_SCORE: f64 = 10.0;

/// Guards half-up rounding against binary representation error
pub const ROUNDING_EPSILON: f64 = 1e-6;

/// Score effective metrics.
///
/// Vectors with no impact on any system (and no Safety override) score 0.0
/// without classification.
pub fn assemble(metrics: &EffectiveMetrics) -> Score {
    if metrics.has_no_impact() {
        debug!("No impact on any system, score fixed at 0.0");
        return Score::base_only(0.0);
    }

    let macro_vector = classify(metrics);
    let Some(baseline) = macrovector::lookup(&macro_vector) else {
        unreachable!("classifier produced macro vector {macro_vector} absent from lookup table");
    };

    let score = round_score(interpolate(&macro_vector, baseline, metrics));
    debug!(
        macro_vector = %macro_vector,
        baseline,
        score,
        "Scored CVSS v4.0 vector"
    );

    Score::base_only(score)
}

/// Clamp to `[0, 10]` and round half-up to one decimal.
pub fn round_score(value: f64) -> f64 {
    let clamped = value.clamp(0.0, MAX_SCORE);
    ((clamped + ROUNDING_EPSILON) * 10.0).round() / 10.0
}
