//! Permit-procedure extraction bundle

use super::CodePattern;
use muni_types::CodeType;

pub const PATTERNS: CodePattern = CodePattern {
    code_type: CodeType::Permit,
    permit_terms: &[
        "permit is required",
        "permit required",
        "requires a permit",
        "discretionary permit",
        "ministerial permit",
        "approval is required",
    ],
    fee_terms: &["permit fee", "application fee", "renewal fee", "late fee"],
    deadline_terms: &[
        "renewal",
        "expires",
        "processing time",
        "review period",
    ],
    action_verbs: &["apply", "file", "submit", "renew", "pay"],
};
