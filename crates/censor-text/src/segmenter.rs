//! Partition the text into plain and entity segments.

use censor_core::{Segment, TextMatch};

/// Walk `kept` (sorted, non-overlapping, as produced by
/// [`resolve_overlaps`](crate::overlap::resolve_overlaps)) and emit segments
/// that cover `text` end to end with no gaps.
///
/// Entity text is sliced from `text`, so it always carries the source casing.
/// A match that starts before the cursor, or whose range is not a valid
/// non-empty slice of `text`, is skipped. Entity occurrence indices count
/// emitted entity segments only.
pub fn build_segments(text: &str, kept: &[TextMatch]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(kept.len() * 2 + 1);
    let mut pos = 0;
    let mut occurrence = 0;

    for m in kept {
        let mention = match text.get(m.span()) {
            Some(mention) if m.start >= pos && !mention.is_empty() => mention,
            _ => {
                tracing::debug!(
                    start = m.start,
                    end = m.end,
                    cursor = pos,
                    "skipping match outside the partition"
                );
                continue;
            }
        };
        if m.start > pos {
            segments.push(Segment::plain(&text[pos..m.start], pos, m.start));
        }
        segments.push(Segment::entity(
            occurrence,
            mention,
            m.category.as_str(),
            m.start,
            m.end,
        ));
        pos = m.end;
        occurrence += 1;
    }

    if pos < text.len() {
        segments.push(Segment::plain(&text[pos..], pos, text.len()));
    }

    segments
}
