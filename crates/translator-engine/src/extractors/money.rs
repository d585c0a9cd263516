// Currency-amount extraction for the fees category
use lazy_static::lazy_static;
use regex::Regex;

use crate::codes::CodePattern;
use crate::jargon::substitute_jargon;
use crate::patterns::{contains_any, push_deduped, split_sentences};

lazy_static! {
    static ref CURRENCY: Regex = Regex::new(r"\$\s?\d[\d,]*(?:\.\d{2})?").unwrap();
    static ref SPELLED_AMOUNT: Regex =
        Regex::new(r"(?i)\b\d[\d,]*(?:\.\d{2})?\s+dollars?\b").unwrap();
}

/// Sentences carrying a fee: a currency amount, a spelled-out dollar
/// amount, or a fee phrase from the active pattern bundles. Each clause is
/// jargon-substituted before it is recorded.
pub fn extract_fee_clauses(text: &str, bundles: &[&CodePattern]) -> Vec<String> {
    let mut clauses = Vec::new();

    for sentence in split_sentences(text) {
        let lower = sentence.to_lowercase();
        let has_amount = CURRENCY.is_match(sentence) || SPELLED_AMOUNT.is_match(sentence);
        let has_fee_phrase = bundles.iter().any(|b| contains_any(&lower, b.fee_terms));

        if has_amount || has_fee_phrase {
            push_deduped(&mut clauses, substitute_jargon(sentence).text);
        }
    }

    clauses
}
