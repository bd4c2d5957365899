//! CVSS v4.0 Scoring Engine
//!
//! Scores CVSS v4.0 vectors by MacroVector classification and
//! severity-distance interpolation.
//!
//! **Pipeline:**
//!
//! ```text
//! vector string
//!      │  tokenize + convert (cvss4)
//!   ┌──▼───┐
//!   │Cvss4 │
//!   └──┬───┘
//!      │  overrides + defaults (resolver)
//!   ┌──▼──────────────┐
//!   │EffectiveMetrics │
//!   └──┬──────────────┘
//!      │  EQ1..EQ6 (classifier)
//!   ┌──▼─────────┐      ┌────────────────────────────┐
//!   │MacroVector ├─────►│ baseline lookup table      │
//!   └──┬─────────┘      │ max-composed, max-severity │
//!      │                └────────────────────────────┘
//!   ┌──▼──────────┐
//!   │Interpolator │  baseline − mean severity distance
//!   └──┬──────────┘
//!      │  clamp + round (engine)
//!   ┌──▼───┐
//!   │Score │
//!   └──────┘
//! ```
//!
//! **Key Invariants:**
//! - Scores lie in `[0.0, 10.0]` with one decimal
//! - Scoring is pure and deterministic; tables are immutable statics
//! - Supplemental metrics never affect the score

pub mod classifier;
pub mod cvss4;
pub mod engine;
pub mod interpolator;
pub mod resolver;
pub mod tables;

pub use classifier::MacroVector;
pub use cvss4::{
    BaseMetrics, Cvss4, EnvironmentalMetrics, Nomenclature, SupplementalMetrics, ThreatMetrics,
};
pub use resolver::EffectiveMetrics;

// Engine version
pub const ENGINE_VERSION: &str = "0.1.0";
