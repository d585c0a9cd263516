//! Confidence scoring for assembled translations
//!
//! The score blends category coverage with resolved-jargon density,
//! dampens union-mode (unknown code type) results, and penalizes every
//! mixed-polarity sentence. Scores are clamped to [0, 1] and are a
//! deterministic function of the inputs.

use muni_types::CodeType;

/// Number of structured output categories
pub const CATEGORY_COUNT: usize = 7;

/// Distinct resolved terms at which the jargon component saturates
const JARGON_SATURATION: f32 = 4.0;

const COVERAGE_WEIGHT: f32 = 0.55;
const JARGON_WEIGHT: f32 = 0.35;
const NON_EMPTY_BASE: f32 = 0.10;
const UNION_DAMPENER: f32 = 0.85;
const AMBIGUITY_PENALTY: f32 = 0.08;

/// Inputs to one scoring pass
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    pub text: &'a str,
    /// Categories (of [`CATEGORY_COUNT`]) holding at least one fact
    pub populated_categories: usize,
    /// Distinct jargon terms plus zone codes resolved in the text
    pub resolved_terms: usize,
    /// Mixed-polarity sentences excluded by the polarity rule
    pub ambiguous_sentences: usize,
    pub code_type: CodeType,
}

/// Score a translation in [0, 1]. Empty input always scores 0.
pub fn score(input: &ScoreInput) -> f32 {
    if input.text.trim().is_empty() {
        return 0.0;
    }

    let coverage = input.populated_categories.min(CATEGORY_COUNT) as f32 / CATEGORY_COUNT as f32;
    let jargon = (input.resolved_terms as f32 / JARGON_SATURATION).min(1.0);

    let mut score = NON_EMPTY_BASE + COVERAGE_WEIGHT * coverage + JARGON_WEIGHT * jargon;
    if input.code_type == CodeType::Unknown {
        score *= UNION_DAMPENER;
    }
    score -= AMBIGUITY_PENALTY * input.ambiguous_sentences as f32;

    score.clamp(0.0, 1.0)
}
