use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One piece of a segmentation. The variant is fixed at construction, so
/// callers never inspect fields to decide whether a segment is censorable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Plain {
        text: String,
        key: String,
        start: usize,
        end: usize,
    },
    #[serde(rename = "entity")]
    EntityMention {
        text: String,
        key: String,
        category: String,
        start: usize,
        end: usize,
    },
}

impl Segment {
    /// Passthrough text covering `start..end`. Keyed by its range.
    pub fn plain(text: impl Into<String>, start: usize, end: usize) -> Self {
        Segment::Plain {
            text: text.into(),
            key: format!("plain-{start}-{end}"),
            start,
            end,
        }
    }

    /// The `occurrence`-th entity mention of a segmentation. The key folds in
    /// the occurrence index so repeated identical mentions never collide.
    pub fn entity(
        occurrence: usize,
        text: impl Into<String>,
        category: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        let category = category.into();
        Segment::EntityMention {
            text: text.into(),
            key: format!("ent-{occurrence}-{start}-{end}-{category}"),
            category,
            start,
            end,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text, .. } | Segment::EntityMention { text, .. } => text,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Segment::Plain { key, .. } | Segment::EntityMention { key, .. } => key,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Segment::Plain { .. } => None,
            Segment::EntityMention { category, .. } => Some(category),
        }
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, Segment::EntityMention { .. })
    }

    pub fn start(&self) -> usize {
        match self {
            Segment::Plain { start, .. } | Segment::EntityMention { start, .. } => *start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Segment::Plain { end, .. } | Segment::EntityMention { end, .. } => *end,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.start()..self.end()
    }
}
