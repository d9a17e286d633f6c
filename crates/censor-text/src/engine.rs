use censor_core::config::RenderConfig;
use censor_core::{CensorConfig, CensorState, Entity, MatchMode};

use crate::segmentation::Segmentation;
use crate::{matcher, overlap, renderer, segmenter};

/// Runs matcher → overlap resolution → segmentation under one configuration.
#[derive(Debug, Clone, Default)]
pub struct CensorEngine {
    mode: MatchMode,
    render: RenderConfig,
}

impl CensorEngine {
    /// Create an engine with the given match mode and default rendering.
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            render: RenderConfig::default(),
        }
    }

    pub fn from_config(config: &CensorConfig) -> Self {
        Self {
            mode: config.matching.mode,
            render: config.render.clone(),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Segment `text` against the detected entities.
    pub fn segment(&self, text: &str, entities: &[Entity]) -> Segmentation {
        let candidates = matcher::find_matches(text, entities, self.mode);
        let candidate_count = candidates.len();
        let kept = overlap::resolve_overlaps(candidates);
        let segments = segmenter::build_segments(text, &kept);

        tracing::debug!(
            entities = entities.len(),
            candidates = candidate_count,
            kept = kept.len(),
            dropped = candidate_count - kept.len(),
            segments = segments.len(),
            "segmentation built"
        );

        Segmentation::new(text.to_string(), segments)
    }

    /// Render using this engine's label configuration.
    pub fn render(&self, segmentation: &Segmentation, state: &CensorState) -> String {
        renderer::render_with_labels(segmentation.segments(), state, &self.render)
    }
}
