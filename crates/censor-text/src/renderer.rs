//! Reconstruct output text from segments and censor state.

use censor_core::config::RenderConfig;
use censor_core::{CensorState, Segment};

/// Render with the plain `[lowercase(category)]` tag.
///
/// With an empty state this reproduces the original input exactly.
pub fn render(segments: &[Segment], state: &CensorState) -> String {
    render_with(segments, state, |category| category.to_lowercase())
}

/// Render using configured labels (overrides, then the default label table).
pub fn render_with_labels(
    segments: &[Segment],
    state: &CensorState,
    config: &RenderConfig,
) -> String {
    render_with(segments, state, |category| config.label_for(category))
}

/// The redaction tag for a label.
pub fn tag(label: &str) -> String {
    format!("[{label}]")
}

fn render_with(
    segments: &[Segment],
    state: &CensorState,
    label: impl Fn(&str) -> String,
) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.text().len()).sum());
    for segment in segments {
        match segment {
            Segment::Plain { text, .. } => out.push_str(text),
            Segment::EntityMention {
                text,
                key,
                category,
                ..
            } => {
                if state.is_censored(key) {
                    out.push_str(&tag(&label(category)));
                } else {
                    out.push_str(text);
                }
            }
        }
    }
    out
}
