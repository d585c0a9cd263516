//! Translates municipal code text into plain-language, structured summaries.
//!
//! The pipeline is a pure function of the input text, the code type, and
//! the static reference tables: jargon substitution, per-category fact
//! extraction, confidence scoring, result assembly. No I/O happens at
//! translation time, so one translator can be shared freely across threads.
//!
//! Output is advisory, not authoritative legal guidance.

pub mod codes;
pub mod confidence;
pub mod error;
pub mod extractors;
pub mod jargon;
pub mod patterns;
pub mod rules;
pub mod zoning;

use muni_types::{CodeType, TranslationResult};

use crate::confidence::ScoreInput;
use crate::error::{check_input, resolve_code_type};
use crate::jargon::substitute_jargon;
use crate::zoning::annotate_zone_codes;

/// MunicipalTranslator entry point
pub struct MunicipalTranslator;

impl MunicipalTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translate one block of municipal code text.
    ///
    /// Never fails: empty input yields a zero-confidence result and
    /// adversarial input degrades to a sparse, low-confidence one.
    pub fn translate(
        &self,
        text: &str,
        code_type: CodeType,
        municipality: &str,
    ) -> TranslationResult {
        if let Err(err) = check_input(text) {
            tracing::debug!(%err, "returning degenerate result");
            let mut result = TranslationResult::empty(code_type, municipality);
            result.original_text = text.to_string();
            return result;
        }

        let bundles = codes::patterns_for(code_type);

        // Plain-English pass over the full text
        let jargon_pass = substitute_jargon(text);
        let mut plain_english = jargon_pass.text;
        let mut resolved_terms = jargon_pass.matched.len();
        if matches!(code_type, CodeType::Zoning | CodeType::Unknown) {
            let zone_pass = annotate_zone_codes(&plain_english);
            resolved_terms += zone_pass.matched.len();
            plain_english = zone_pass.text;
        }

        // Per-category fact extraction
        let permits_required = rules::permits::extract_permit_mentions(text, &bundles);
        let deadlines = extractors::temporal::extract_deadline_clauses(text, &bundles);
        let fees = extractors::money::extract_fee_clauses(text, &bundles);
        let contact_info = extractors::contact::extract_contacts(text);
        let polarity = rules::polarity::split_permissions(text);
        let next_steps =
            rules::next_steps::extract_next_steps(text, &bundles, &permits_required, &contact_info);

        let populated_categories = [
            &polarity.can_do,
            &polarity.cannot_do,
            &permits_required,
            &deadlines,
            &fees,
            &contact_info,
            &next_steps,
        ]
        .iter()
        .filter(|list| !list.is_empty())
        .count();

        let confidence_score = confidence::score(&ScoreInput {
            text,
            populated_categories,
            resolved_terms,
            ambiguous_sentences: polarity.ambiguous,
            code_type,
        });

        TranslationResult {
            original_text: text.to_string(),
            plain_english,
            what_you_can_do: polarity.can_do,
            what_you_cannot_do: polarity.cannot_do,
            permits_required,
            deadlines,
            fees,
            contact_info,
            next_steps,
            confidence_score,
            code_type,
            municipality: municipality.to_string(),
        }
    }

    /// Translate with a free-text code-type label.
    ///
    /// Unrecognized labels fall back to unknown (union-mode extraction)
    /// rather than failing.
    pub fn translate_labeled(
        &self,
        text: &str,
        code_type_label: &str,
        municipality: &str,
    ) -> TranslationResult {
        let code_type = match resolve_code_type(code_type_label) {
            Ok(code_type) => code_type,
            Err(err) => {
                tracing::warn!(label = code_type_label, %err, "falling back to union-mode extraction");
                CodeType::Unknown
            }
        };
        self.translate(text, code_type, municipality)
    }
}

impl Default for MunicipalTranslator {
    fn default() -> Self {
        Self::new()
    }
}
