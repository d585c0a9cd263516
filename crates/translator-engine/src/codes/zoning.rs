//! Zoning-ordinance extraction bundle

use super::CodePattern;
use muni_types::CodeType;

pub const PATTERNS: CodePattern = CodePattern {
    code_type: CodeType::Zoning,
    permit_terms: &[
        "conditional use permit",
        "variance",
        "special exception",
        "rezoning",
        "site plan review",
        "zoning approval",
    ],
    fee_terms: &["impact fee", "application fee", "review fee", "filing fee"],
    deadline_terms: &[
        "public comment period",
        "appeal period",
        "processing time",
        "notice period",
    ],
    action_verbs: &["submit", "apply", "attend", "request"],
};
