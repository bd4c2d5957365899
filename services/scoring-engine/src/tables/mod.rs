//! Static scoring tables
//!
//! All tables are compile-time data shared read-only across threads.

pub mod macrovector;
pub mod max_composed;
pub mod max_severity;
