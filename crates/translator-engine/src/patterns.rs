//! Keyword tables and text helpers shared across extraction rules

/// Terms that flag a sentence as permit-related regardless of code type
pub const PERMIT_KEYWORDS: &[&str] = &[
    "permit",
    "license",
    "approval",
    "authorization",
    "certificate",
    "clearance",
    "registration",
];

/// Markers indicating a sentence grants permission
pub const PERMISSIVE_MARKERS: &[&str] = &[
    "may",
    "is permitted",
    "are permitted",
    "is allowed",
    "are allowed",
    "allowed",
    "can be",
    "is authorized",
];

/// Markers indicating a sentence prohibits an action
///
/// Phrases containing permissive substrings ("may not", "not allowed") must
/// stay in this list so polarity scrubbing removes them before the
/// permissive test.
pub const PROHIBITIVE_MARKERS: &[&str] = &[
    "shall not",
    "may not",
    "must not",
    "cannot",
    "prohibited",
    "not permitted",
    "not allowed",
    "disallowed",
    "forbidden",
    "unlawful",
    "is illegal",
];

/// Verbs that open an actionable instruction regardless of code type
pub const ACTION_VERBS: &[&str] = &[
    "submit",
    "file",
    "apply",
    "contact",
    "call",
    "schedule",
    "obtain",
    "complete",
    "pay",
    "provide",
    "visit",
    "bring",
    "request",
    "register",
];

/// Split text into sentences, dropping empty fragments.
///
/// A terminator only ends a sentence when followed by whitespace or the end
/// of the text, so decimal amounts like "$250.00" stay intact.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut sentences = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if matches!(c, '.' | '!' | '?')
            && bytes.get(i + 1).map_or(true, |b| b.is_ascii_whitespace())
        {
            let sentence = text[start..i].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = i + 1;
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// Normalize a string for deduplication: lowercased, whitespace collapsed
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Push `value` onto `list` unless its normalized form is already present.
/// Preserves first-encountered order; empty strings are dropped.
pub fn push_deduped(list: &mut Vec<String>, value: String) {
    if value.trim().is_empty() {
        return;
    }
    let key = normalize(&value);
    if !list.iter().any(|existing| normalize(existing) == key) {
        list.push(value);
    }
}

/// Check whether any keyword from the list occurs in the (lowercased) text
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text_lower.contains(kw))
}

/// Word-boundary-aware presence test for polarity markers.
///
/// Single-word markers match whole tokens only ("may" must not match
/// "mayor"); multi-word markers fall back to substring search.
pub fn contains_term(text_lower: &str, term: &str) -> bool {
    if term.contains(' ') {
        return text_lower.contains(term);
    }
    text_lower
        .split(|c: char| !c.is_alphanumeric() && c != '-')
        .any(|word| word == term)
}

/// Any marker from the list present, on word boundaries
pub fn contains_any_term(text_lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| contains_term(text_lower, m))
}

/// Remove every occurrence of the given phrases from the (lowercased) text.
/// Used to scrub prohibitive phrases before the permissive polarity test.
pub fn scrub_phrases(text_lower: &str, phrases: &[&str]) -> String {
    let mut scrubbed = text_lower.to_string();
    for phrase in phrases {
        while let Some(pos) = scrubbed.find(phrase) {
            scrubbed.replace_range(pos..pos + phrase.len(), " ");
        }
    }
    scrubbed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        let text = "A permit is required. The fee is $250! Apply today";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec!["A permit is required", "The fee is $250", "Apply today"]
        );
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" . . ").is_empty());
    }

    #[test]
    fn test_split_keeps_decimal_amounts_intact() {
        let sentences = split_sentences("The fee is $250.00 per unit. Pay at city hall.");
        assert_eq!(
            sentences,
            vec!["The fee is $250.00 per unit", "Pay at city hall"]
        );
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  A   Building\tPermit "), "a building permit");
    }

    #[test]
    fn test_push_deduped_keeps_first_encounter_order() {
        let mut list = Vec::new();
        push_deduped(&mut list, "A permit is required".to_string());
        push_deduped(&mut list, "a  permit is REQUIRED".to_string());
        push_deduped(&mut list, "The fee is $250".to_string());
        assert_eq!(list, vec!["A permit is required", "The fee is $250"]);
    }

    #[test]
    fn test_push_deduped_drops_empty() {
        let mut list = Vec::new();
        push_deduped(&mut list, "   ".to_string());
        assert!(list.is_empty());
    }

    #[test]
    fn test_scrub_phrases_removes_prohibitive_forms() {
        let scrubbed = scrub_phrases("you may not park here", PROHIBITIVE_MARKERS);
        assert!(!scrubbed.contains("may not"));
        assert!(!contains_any_term(&scrubbed, PERMISSIVE_MARKERS));
    }

    #[test]
    fn test_scrub_keeps_independent_permissive_marker() {
        let scrubbed = scrub_phrases(
            "you may park here but shall not block the drive",
            PROHIBITIVE_MARKERS,
        );
        assert!(contains_any_term(&scrubbed, PERMISSIVE_MARKERS));
    }

    #[test]
    fn test_contains_term_respects_word_boundaries() {
        assert!(contains_term("the mayor may approve", "may"));
        assert!(!contains_term("the mayor votes", "may"));
        assert!(!contains_term("parking is disallowed", "allowed"));
        assert!(contains_term("fences are not allowed", "not allowed"));
    }
}
