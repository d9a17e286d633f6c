//! Censor state transitions. All total, all returning a fresh state.

use censor_core::{CensorState, Segment};

/// Flip one key: absent → censored, censored → absent.
pub fn toggle(state: &CensorState, key: &str) -> CensorState {
    let mut next = state.clone();
    let censored = next.is_censored(key);
    next.set(key, !censored);
    next
}

/// A fresh state with every entity segment censored. Prior toggles are
/// discarded, not merged. Plain segments are never represented.
pub fn censor_all(segments: &[Segment]) -> CensorState {
    segments
        .iter()
        .filter(|s| s.is_entity())
        .map(Segment::key)
        .collect()
}

/// Clear every toggle.
pub fn uncensor_all() -> CensorState {
    CensorState::new()
}
