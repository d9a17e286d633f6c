//! # censor-core
//!
//! Foundation crate for the CensorIt redaction pipeline.
//! Defines the data model, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CensorConfig, MatchMode};
pub use errors::{CensorError, CensorResult};
pub use models::{CensorState, DetectedEntity, DetectionResult, Entity, Segment, TextMatch};
