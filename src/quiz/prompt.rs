//! Blank marker handling for question prompts
//!
//! A prompt marks its blank with a run of one or more `…` characters. The
//! first run becomes the drop zone; any later run is left as plain text so
//! that a rendered question never has more than one drop zone.

use serde::{Deserialize, Serialize};

use crate::constants::question::BLANK_MARKER;

/// A piece of a rendered prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptSegment {
    /// Literal prompt text
    Text(String),
    /// The drop zone
    Blank,
}

/// Splits a prompt into text around its first blank-marker run
///
/// A prompt without a marker yields a single text segment (or nothing for an
/// empty prompt), which renders a question without a drop zone.
pub fn split(prompt: &str) -> Vec<PromptSegment> {
    let Some(start) = prompt.find(BLANK_MARKER) else {
        return text_segment(prompt).into_iter().collect();
    };

    let end = prompt[start..]
        .char_indices()
        .find(|(_, c)| *c != BLANK_MARKER)
        .map_or(prompt.len(), |(offset, _)| start + offset);

    text_segment(&prompt[..start])
        .into_iter()
        .chain(std::iter::once(PromptSegment::Blank))
        .chain(text_segment(&prompt[end..]))
        .collect()
}

/// Returns whether the segments contain a drop zone
pub fn has_blank(segments: &[PromptSegment]) -> bool {
    segments.contains(&PromptSegment::Blank)
}

fn text_segment(text: &str) -> Option<PromptSegment> {
    (!text.is_empty()).then(|| PromptSegment::Text(text.to_owned()))
}
