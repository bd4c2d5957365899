//! Types library for CVSS scoring
//!
//! Shared definitions consumed by the scoring engines: metric enumerations,
//! score records, the parse error taxonomy and the vector tokenizer.
//!
//! # Modules
//! - `metrics`: CVSS v4.0 metric enumerations and wire codes
//! - `score`: Score record and qualitative severity rating
//! - `vector`: Version-agnostic vector-string tokenizer
//! - `errors`: Error taxonomy

pub mod metrics;
pub mod score;
pub mod vector;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::metrics::*;
    pub use crate::score::*;
    pub use crate::vector::*;
    pub use crate::errors::*;
}
