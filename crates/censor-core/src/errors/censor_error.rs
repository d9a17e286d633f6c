use super::{ConfigError, DetectorError};

/// Top-level error for every fallible CensorIt operation.
///
/// The text pipeline itself is total; errors only come from the detector
/// boundary, configuration loading, and session sequencing.
#[derive(Debug, thiserror::Error)]
pub enum CensorError {
    #[error("Failed to process input: {0}")]
    Detector(#[from] DetectorError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid pattern for surface form {surface_form:?}: {reason}")]
    InvalidPattern {
        surface_form: String,
        reason: String,
    },

    #[error("stale detection response: sequence {sequence}, latest issued {latest}")]
    StaleResponse { sequence: u64, latest: u64 },

    #[error("session not found: {id}")]
    SessionNotFound { id: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CensorResult<T> = Result<T, CensorError>;
