//! Building-code extraction bundle

use super::CodePattern;
use muni_types::CodeType;

pub const PATTERNS: CodePattern = CodePattern {
    code_type: CodeType::Building,
    permit_terms: &[
        "building permit",
        "certificate of occupancy",
        "demolition permit",
        "electrical permit",
        "plumbing permit",
        "mechanical permit",
        "inspection required",
    ],
    fee_terms: &["permit fee", "inspection fee", "plan check fee"],
    deadline_terms: &[
        "inspection must be scheduled",
        "permit expires",
        "expiration",
        "before work begins",
    ],
    action_verbs: &["schedule", "obtain", "post", "submit"],
};
