//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields. Input text
//! is never logged, only its length.

/// Log the start of a detection request.
pub fn detection_started(sequence: u64, text_len: usize) {
    tracing::info!(
        event = "detection_started",
        sequence = sequence,
        text_len = text_len,
        "detection started"
    );
}

/// Log a detection whose result was applied to the session.
pub fn detection_completed(sequence: u64, entities: usize, entity_segments: usize) {
    tracing::info!(
        event = "detection_completed",
        sequence = sequence,
        entities = entities,
        entity_segments = entity_segments,
        "detection completed"
    );
}

/// Log a detection failure surfaced to the caller.
pub fn detection_failed(sequence: u64, error: &str) {
    tracing::warn!(
        event = "detection_failed",
        sequence = sequence,
        error = %error,
        "detection failed"
    );
}

/// Log a response discarded because a newer request was issued.
pub fn stale_response_discarded(sequence: u64, latest: u64) {
    tracing::debug!(
        event = "stale_response_discarded",
        sequence = sequence,
        latest = latest,
        "stale detection response discarded"
    );
}

/// Log a single toggle.
pub fn segment_toggled(key: &str, censored: bool) {
    tracing::debug!(
        event = "segment_toggled",
        key = %key,
        censored = censored,
        "segment toggled"
    );
}

/// Log a bulk censor-all.
pub fn censor_all_applied(censored: usize) {
    tracing::debug!(
        event = "censor_all_applied",
        censored = censored,
        "all entity segments censored"
    );
}

/// Log a bulk uncensor-all.
pub fn uncensor_all_applied() {
    tracing::debug!(event = "uncensor_all_applied", "censor state cleared");
}
