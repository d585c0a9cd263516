//! Business-licensing extraction bundle

use super::CodePattern;
use muni_types::CodeType;

pub const PATTERNS: CodePattern = CodePattern {
    code_type: CodeType::Business,
    permit_terms: &[
        "business license",
        "home occupation permit",
        "operating license",
        "health permit",
        "signage permit",
    ],
    fee_terms: &["license fee", "annual fee", "registration fee"],
    deadline_terms: &[
        "annual renewal",
        "license expires",
        "renewal deadline",
        "before opening",
    ],
    action_verbs: &["register", "renew", "apply", "display"],
};
