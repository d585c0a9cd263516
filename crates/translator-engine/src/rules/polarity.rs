// Sentence polarity: what you can do vs what you cannot do
use crate::jargon::substitute_jargon;
use crate::patterns::{
    contains_any_term, push_deduped, scrub_phrases, split_sentences, PERMISSIVE_MARKERS,
    PROHIBITIVE_MARKERS,
};

/// Outcome of the polarity pass over one text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolaritySplit {
    pub can_do: Vec<String>,
    pub cannot_do: Vec<String>,
    /// Sentences carrying both polarities, excluded from both lists
    pub ambiguous: usize,
}

/// Classify each sentence as permissive, prohibitive, or neither.
///
/// Prohibitive phrases are scrubbed before the permissive test so "may not"
/// never reads as permission. A sentence with independent markers of both
/// polarities lands in neither list and counts as ambiguous.
pub fn split_permissions(text: &str) -> PolaritySplit {
    let mut split = PolaritySplit::default();

    for sentence in split_sentences(text) {
        let lower = sentence.to_lowercase();
        let prohibitive = contains_any_term(&lower, PROHIBITIVE_MARKERS);
        let scrubbed = scrub_phrases(&lower, PROHIBITIVE_MARKERS);
        let permissive = contains_any_term(&scrubbed, PERMISSIVE_MARKERS);

        match (permissive, prohibitive) {
            (true, true) => {
                split.ambiguous += 1;
                tracing::debug!(sentence, "mixed-polarity sentence excluded from both lists");
            }
            (true, false) => push_deduped(&mut split.can_do, substitute_jargon(sentence).text),
            (false, true) => push_deduped(&mut split.cannot_do, substitute_jargon(sentence).text),
            (false, false) => {}
        }
    }

    split
}
