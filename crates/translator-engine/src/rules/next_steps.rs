// Actionable next-step sentences
use crate::codes::CodePattern;
use crate::jargon::substitute_jargon;
use crate::patterns::{normalize, push_deduped, split_sentences, ACTION_VERBS};

/// Sentences opening with an action verb, excluding those already captured
/// as a permit entry or contributing a contact fact.
pub fn extract_next_steps(
    text: &str,
    bundles: &[&CodePattern],
    permits: &[String],
    contacts: &[String],
) -> Vec<String> {
    let mut steps = Vec::new();

    for sentence in split_sentences(text) {
        let Some(first_word) = sentence.split_whitespace().next() else {
            continue;
        };
        let first = first_word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();

        let is_action = ACTION_VERBS.contains(&first.as_str())
            || bundles
                .iter()
                .any(|b| b.action_verbs.contains(&first.as_str()));
        if !is_action {
            continue;
        }

        let substituted = substitute_jargon(sentence).text;
        let already_permit = permits
            .iter()
            .any(|p| normalize(p) == normalize(&substituted));
        let contributes_contact = contacts.iter().any(|c| sentence.contains(c.as_str()));
        if already_permit || contributes_contact {
            continue;
        }

        push_deduped(&mut steps, substituted);
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use muni_types::CodeType;
    use pretty_assertions::assert_eq;

    fn bundles() -> Vec<&'static CodePattern> {
        codes::patterns_for(CodeType::Unknown)
    }

    #[test]
    fn test_captures_imperative_sentence() {
        let steps = extract_next_steps(
            "Submit two copies of the site plan. The plaza has benches.",
            &bundles(),
            &[],
            &[],
        );
        assert_eq!(steps, vec!["Submit two copies of the site plan"]);
    }

    #[test]
    fn test_verb_must_open_the_sentence() {
        let steps = extract_next_steps(
            "Applicants should submit plans early.",
            &bundles(),
            &[],
            &[],
        );
        assert!(steps.is_empty());
    }

    #[test]
    fn test_skips_sentence_already_captured_as_permit() {
        let permits = vec!["Obtain a permission to construct or renovate (originally: 'building permit') first".to_string()];
        let steps = extract_next_steps(
            "Obtain a building permit first.",
            &bundles(),
            &permits,
            &[],
        );
        assert!(steps.is_empty());
    }

    #[test]
    fn test_skips_sentence_contributing_a_contact() {
        let contacts = vec!["Planning Department".to_string()];
        let steps = extract_next_steps(
            "Contact the Planning Department before digging.",
            &bundles(),
            &[],
            &contacts,
        );
        assert!(steps.is_empty());
    }

    #[test]
    fn test_bundle_verb_counts() {
        // "renew" is a bundle verb, not a global one
        let steps = extract_next_steps("Renew the license each January.", &bundles(), &[], &[]);
        assert_eq!(steps.len(), 1);
    }
}
