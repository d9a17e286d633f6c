/// Failures at the entity-detector boundary.
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed detector response: {reason}")]
    MalformedResponse { reason: String },

    #[error("gave up after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    #[error("detector unavailable: {reason}")]
    Unavailable { reason: String },
}
