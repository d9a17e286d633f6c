//! Reduce candidate matches to a non-overlapping, ordered subset.
//!
//! Greedy interval scheduling: sort by start ascending, longer first on equal
//! start, then sweep left to right keeping every match that begins at or
//! after the end of the last kept one. Leftmost-first and longest-on-tie,
//! not a maximum-coverage selection: a long early match can shadow several
//! shorter later ones.

use censor_core::TextMatch;

/// Resolve overlaps. Dropped matches vanish without a trace.
///
/// The sort is stable, so among identical spans the candidate discovered
/// first (earlier entity in the detector's list) wins.
pub fn resolve_overlaps(mut matches: Vec<TextMatch>) -> Vec<TextMatch> {
    matches.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut kept = Vec::with_capacity(matches.len());
    let mut cursor = 0;
    for m in matches {
        if m.start >= cursor {
            cursor = m.end;
            kept.push(m);
        }
    }
    kept
}
