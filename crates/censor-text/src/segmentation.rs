//! A segmentation result: the source text plus its partition.

use censor_core::{CensorState, Segment};
use serde::{Deserialize, Serialize};

use crate::renderer;

/// The output of one detection pass. Segment keys are unique within it and
/// only meaningful against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSegmentation")]
pub struct Segmentation {
    text: String,
    segments: Vec<Segment>,
}

/// Wire form, checked against the partition invariants before it becomes a
/// [`Segmentation`].
#[derive(Deserialize)]
struct RawSegmentation {
    text: String,
    segments: Vec<Segment>,
}

impl TryFrom<RawSegmentation> for Segmentation {
    type Error = String;

    fn try_from(raw: RawSegmentation) -> Result<Self, Self::Error> {
        let segmentation = Self {
            text: raw.text,
            segments: raw.segments,
        };
        if segmentation.verify_partition() {
            Ok(segmentation)
        } else {
            Err("segments do not partition the text".to_string())
        }
    }
}

impl Segmentation {
    pub(crate) fn new(text: String, segments: Vec<Segment>) -> Self {
        let segmentation = Self { text, segments };
        debug_assert!(segmentation.verify_partition());
        segmentation
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn entity_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_entity())
    }

    pub fn entity_keys(&self) -> impl Iterator<Item = &str> {
        self.entity_segments().map(Segment::key)
    }

    pub fn entity_count(&self) -> usize {
        self.entity_segments().count()
    }

    /// Whether `key` names an entity segment of this segmentation.
    pub fn has_entity_key(&self, key: &str) -> bool {
        self.entity_keys().any(|k| k == key)
    }

    /// Render with plain `[category]` tags.
    pub fn render(&self, state: &CensorState) -> String {
        renderer::render(&self.segments, state)
    }

    /// Check the partition invariants: segments are contiguous, start at 0,
    /// end at `text.len()`, are non-empty, carry unique keys, and each
    /// segment's text is exactly its slice of the source.
    pub fn verify_partition(&self) -> bool {
        let mut pos = 0;
        let mut keys = std::collections::HashSet::new();
        for segment in &self.segments {
            let span = segment.span();
            if span.start != pos || span.end <= span.start || span.end > self.text.len() {
                return false;
            }
            if self.text.get(span.clone()) != Some(segment.text()) {
                return false;
            }
            if !keys.insert(segment.key()) {
                return false;
            }
            pos = span.end;
        }
        pos == self.text.len()
    }
}
