// Deadline and date-token extraction
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::codes::CodePattern;
use crate::jargon::substitute_jargon;
use crate::patterns::{contains_any, push_deduped, split_sentences};

lazy_static! {
    static ref RELATIVE_PERIOD: Regex = Regex::new(
        r"(?i)\bwithin\s+\d+\s+(?:calendar\s+|business\s+)?(?:day|week|month|year)s?\b"
    )
    .unwrap();
    static ref NUMERIC_DATE: Regex =
        Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{2}|\d{4})\b").unwrap();
    static ref MONTH_DATE: Regex = Regex::new(
        r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:,\s*\d{4})?\b"
    )
    .unwrap();
    static ref DEADLINE_PHRASE: Regex =
        Regex::new(r"(?i)\b(?:no later than|not later than|due (?:by|date)|expires?\b|expiration)")
            .unwrap();
}

/// Reject date-shaped tokens that are not real calendar dates ("13/45/2020")
fn is_plausible_date(month: &str, day: &str, year: &str) -> bool {
    let (Ok(m), Ok(d), Ok(mut y)) = (
        month.parse::<u32>(),
        day.parse::<u32>(),
        year.parse::<i32>(),
    ) else {
        return false;
    };
    if y < 100 {
        y += 2000;
    }
    NaiveDate::from_ymd_opt(y, m, d).is_some()
}

fn has_numeric_date(sentence: &str) -> bool {
    NUMERIC_DATE.captures_iter(sentence).any(|caps| {
        is_plausible_date(
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
            caps.get(3).map_or("", |m| m.as_str()),
        )
    })
}

/// Sentences carrying a deadline: relative periods ("within 30 days"),
/// calendar dates, deadline phrasing, or a bundle deadline term. Clauses
/// are jargon-substituted before they are recorded.
pub fn extract_deadline_clauses(text: &str, bundles: &[&CodePattern]) -> Vec<String> {
    let mut clauses = Vec::new();

    for sentence in split_sentences(text) {
        let lower = sentence.to_lowercase();
        let hit = RELATIVE_PERIOD.is_match(sentence)
            || has_numeric_date(sentence)
            || MONTH_DATE.is_match(sentence)
            || DEADLINE_PHRASE.is_match(sentence)
            || bundles.iter().any(|b| contains_any(&lower, b.deadline_terms));

        if hit {
            push_deduped(&mut clauses, substitute_jargon(sentence).text);
        }
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use muni_types::CodeType;

    fn all_bundles() -> Vec<&'static CodePattern> {
        codes::patterns_for(CodeType::Unknown)
    }

    #[test]
    fn test_relative_period() {
        let clauses =
            extract_deadline_clauses("Appeal within 30 days of the decision.", &all_bundles());
        assert_eq!(clauses, vec!["Appeal within 30 days of the decision"]);
    }

    #[test]
    fn test_business_days() {
        let clauses = extract_deadline_clauses(
            "Plans are reviewed within 10 business days.",
            &all_bundles(),
        );
        assert_eq!(clauses.len(), 1);
    }

    #[test]
    fn test_numeric_date_accepted() {
        let clauses =
            extract_deadline_clauses("Applications close on 6/30/2026.", &all_bundles());
        assert_eq!(clauses.len(), 1);
    }

    #[test]
    fn test_impossible_date_rejected() {
        let clauses = extract_deadline_clauses("Lot ratio is 13/45/2020.", &all_bundles());
        assert!(clauses.is_empty());
    }

    #[test]
    fn test_month_name_date() {
        let clauses = extract_deadline_clauses(
            "Renewals are due by January 15, 2027.",
            &all_bundles(),
        );
        assert_eq!(clauses.len(), 1);
    }

    #[test]
    fn test_no_deadline_content() {
        assert!(extract_deadline_clauses("Fences may be six feet.", &all_bundles()).is_empty());
    }
}
