use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One occurrence of an entity surface form in the source text.
///
/// `start..end` is a half-open byte range on char boundaries.
/// `matched_text` is the source substring, with its original casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMatch {
    pub start: usize,
    pub end: usize,
    pub category: String,
    pub matched_text: String,
}

impl TextMatch {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn overlaps(&self, other: &TextMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}
