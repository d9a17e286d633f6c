//! SessionState: one caller's view of the censoring pipeline.

use censor_core::traits::IDetector;
use censor_core::{CensorError, CensorResult, CensorState, Entity, Segment};
use censor_observability::events;
use censor_text::{state as censor_ops, CensorEngine, Segmentation};
use serde::{Deserialize, Serialize};

use crate::ticket::RequestTicket;

/// Immutable session record. Every transition returns a new value.
///
/// The segmentation and censor state are only ever replaced together, so
/// toggles from one detection run are never read against another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    text: String,
    segmentation: Option<Segmentation>,
    censor_state: CensorState,
    error: Option<String>,
    loading: bool,
    latest_request: u64,
}

impl SessionState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn segmentation(&self) -> Option<&Segmentation> {
        self.segmentation.as_ref()
    }

    /// Current segments, or none before a successful detection.
    pub fn segments(&self) -> &[Segment] {
        self.segmentation
            .as_ref()
            .map(Segmentation::segments)
            .unwrap_or(&[])
    }

    pub fn censor_state(&self) -> &CensorState {
        &self.censor_state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_segmented(&self) -> bool {
        self.segmentation.is_some()
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// Whether a response for `ticket` may still be applied.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.sequence() == self.latest_request
    }

    /// New input text. Drops the old segmentation and invalidates any
    /// in-flight request, whose result would describe the old text.
    pub fn on_input(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            segmentation: None,
            censor_state: CensorState::new(),
            error: None,
            loading: false,
            latest_request: self.latest_request + 1,
        }
    }

    /// Begin a detection run.
    pub fn on_detect_start(&self) -> (Self, RequestTicket) {
        let sequence = self.latest_request + 1;
        events::detection_started(sequence, self.text.len());
        let next = Self {
            text: self.text.clone(),
            segmentation: None,
            censor_state: CensorState::new(),
            error: None,
            loading: true,
            latest_request: sequence,
        };
        (next, RequestTicket::new(sequence))
    }

    /// Apply detected entities. A stale ticket is rejected and the caller
    /// keeps its current state.
    pub fn on_detect_success(
        &self,
        ticket: RequestTicket,
        entities: &[Entity],
        engine: &CensorEngine,
    ) -> CensorResult<Self> {
        self.ensure_current(ticket)?;
        let segmentation = engine.segment(&self.text, entities);
        events::detection_completed(
            ticket.sequence(),
            entities.len(),
            segmentation.entity_count(),
        );
        Ok(self.reset(segmentation))
    }

    /// Replace segmentation and censor state in one step.
    pub fn reset(&self, segmentation: Segmentation) -> Self {
        Self {
            text: segmentation.text().to_string(),
            segmentation: Some(segmentation),
            censor_state: CensorState::new(),
            error: None,
            loading: false,
            latest_request: self.latest_request,
        }
    }

    /// Record a failed detection. Stale failures are ignored.
    pub fn on_detect_failure(&self, ticket: RequestTicket, error: &CensorError) -> Self {
        if self.ensure_current(ticket).is_err() {
            return self.clone();
        }
        let message = error.to_string();
        events::detection_failed(ticket.sequence(), &message);
        Self {
            text: self.text.clone(),
            segmentation: None,
            censor_state: CensorState::new(),
            error: Some(message),
            loading: false,
            latest_request: self.latest_request,
        }
    }

    /// Flip one entity segment. Keys outside the current segmentation are
    /// ignored.
    pub fn on_toggle(&self, key: &str) -> Self {
        let Some(segmentation) = &self.segmentation else {
            return self.clone();
        };
        if !segmentation.has_entity_key(key) {
            return self.clone();
        }
        let censor_state = censor_ops::toggle(&self.censor_state, key);
        events::segment_toggled(key, censor_state.is_censored(key));
        self.with_censor_state(censor_state)
    }

    pub fn on_censor_all(&self) -> Self {
        let Some(segmentation) = &self.segmentation else {
            return self.clone();
        };
        let censor_state = censor_ops::censor_all(segmentation.segments());
        events::censor_all_applied(censor_state.len());
        self.with_censor_state(censor_state)
    }

    pub fn on_uncensor_all(&self) -> Self {
        if self.segmentation.is_none() {
            return self.clone();
        }
        events::uncensor_all_applied();
        self.with_censor_state(censor_ops::uncensor_all())
    }

    /// Text for the copy action: rendered output once segmented, the raw
    /// input before that.
    pub fn output(&self, engine: &CensorEngine) -> String {
        match &self.segmentation {
            Some(segmentation) => engine.render(segmentation, &self.censor_state),
            None => self.text.clone(),
        }
    }

    /// Start, call the detector, and apply the outcome. Detector errors end
    /// up in [`SessionState::error`].
    pub fn run_detection(
        &self,
        detector: &dyn IDetector,
        engine: &CensorEngine,
        threshold: f64,
    ) -> Self {
        let (started, ticket) = self.on_detect_start();
        match censor_detector::detect_entities(detector, &started.text, threshold) {
            Ok(entities) => match started.on_detect_success(ticket, &entities, engine) {
                Ok(next) => next,
                Err(e) => started.on_detect_failure(ticket, &e),
            },
            Err(e) => started.on_detect_failure(ticket, &e),
        }
    }

    fn ensure_current(&self, ticket: RequestTicket) -> CensorResult<()> {
        if self.is_current(ticket) {
            return Ok(());
        }
        events::stale_response_discarded(ticket.sequence(), self.latest_request);
        Err(CensorError::StaleResponse {
            sequence: ticket.sequence(),
            latest: self.latest_request,
        })
    }

    fn with_censor_state(&self, censor_state: CensorState) -> Self {
        Self {
            censor_state,
            ..self.clone()
        }
    }
}
