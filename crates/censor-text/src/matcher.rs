//! Locate every occurrence of each entity's surface form in the text.
//!
//! Matching is case-insensitive and bounded by word boundaries. Each match
//! records the source substring, never the surface form, so segments can
//! be stitched back into the exact input.

use censor_core::errors::CensorResult;
use censor_core::{CensorError, Entity, MatchMode, TextMatch};
use regex::{Regex, RegexBuilder};

/// Find all candidate matches for `entities` in `text`.
///
/// Entities with a blank surface form, or whose pattern cannot be built, are
/// skipped. Output is grouped per entity, each group in discovery order.
/// Matches from different entities may overlap.
pub fn find_matches(text: &str, entities: &[Entity], mode: MatchMode) -> Vec<TextMatch> {
    let mut matches = Vec::new();

    for entity in entities {
        if !entity.is_matchable() {
            continue;
        }
        let re = match build_pattern(&entity.surface_form, mode) {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!(
                    category = %entity.category,
                    error = %e,
                    "skipping entity with unusable surface form"
                );
                continue;
            }
        };
        collect_matches(text, &re, &entity.category, &mut matches);
    }

    matches
}

/// Compile the case-insensitive pattern for a surface form.
pub fn build_pattern(surface_form: &str, mode: MatchMode) -> CensorResult<Regex> {
    let body = match mode {
        MatchMode::Strict => format!(r"\b{}\b", regex::escape(surface_form)),
        MatchMode::Flexible => flexible_body(surface_form).ok_or_else(|| {
            CensorError::InvalidPattern {
                surface_form: surface_form.to_string(),
                reason: "no alphanumeric tokens".to_string(),
            }
        })?,
    };

    RegexBuilder::new(&body)
        .case_insensitive(true)
        .build()
        .map_err(|e| CensorError::InvalidPattern {
            surface_form: surface_form.to_string(),
            reason: e.to_string(),
        })
}

/// Alphanumeric tokens of the surface form, escaped and joined by any run of
/// non-word characters, so "block 110" also finds "Block, 110".
fn flexible_body(surface_form: &str) -> Option<String> {
    let tokens: Vec<String> = surface_form
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(regex::escape)
        .collect();
    if tokens.is_empty() {
        return None;
    }
    Some(format!(r"\b{}\b", tokens.join(r"[\W_]+")))
}

fn collect_matches(text: &str, re: &Regex, category: &str, out: &mut Vec<TextMatch>) {
    let mut pos = 0;
    while pos <= text.len() {
        let Some(m) = re.find_at(text, pos) else {
            break;
        };
        if m.is_empty() {
            // Never record an empty span; step one char past it.
            match text[m.end()..].chars().next() {
                Some(c) => pos = m.end() + c.len_utf8(),
                None => break,
            }
            continue;
        }
        out.push(TextMatch {
            start: m.start(),
            end: m.end(),
            category: category.to_string(),
            matched_text: m.as_str().to_string(),
        });
        pos = m.end();
    }
}
