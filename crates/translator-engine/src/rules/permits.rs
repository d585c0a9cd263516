// Permit-requirement sentence rule
use crate::codes::CodePattern;
use crate::jargon::substitute_jargon;
use crate::patterns::{contains_any, push_deduped, split_sentences, PERMIT_KEYWORDS};

/// Sentences naming a permit, license, or approval, captured whole and
/// jargon-substituted. A sentence qualifies through the global permit
/// keyword list or any active bundle's permit phrases.
pub fn extract_permit_mentions(text: &str, bundles: &[&CodePattern]) -> Vec<String> {
    let mut mentions = Vec::new();

    for sentence in split_sentences(text) {
        let lower = sentence.to_lowercase();
        let hit = contains_any(&lower, PERMIT_KEYWORDS)
            || bundles.iter().any(|b| contains_any(&lower, b.permit_terms));

        if hit {
            push_deduped(&mut mentions, substitute_jargon(sentence).text);
        }
    }

    mentions
}
