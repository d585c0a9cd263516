use serde::{Deserialize, Serialize};

/// Category of municipal code a text was sourced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeType {
    Zoning,
    Building,
    Permit,
    Business,
    /// Caller could not classify the source; extraction unions all bundles
    Unknown,
}

impl CodeType {
    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CodeType::Zoning => "zoning",
            CodeType::Building => "building",
            CodeType::Permit => "permit",
            CodeType::Business => "business",
            CodeType::Unknown => "unknown",
        }
    }

    /// Parse from a code-type label (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "zoning" | "zone" => Some(CodeType::Zoning),
            "building" | "construction" => Some(CodeType::Building),
            "permit" | "permits" | "permitting" => Some(CodeType::Permit),
            "business" | "licensing" => Some(CodeType::Business),
            "unknown" | "other" | "" => Some(CodeType::Unknown),
            _ => None,
        }
    }

    /// The four concrete code types, in the fixed order used for union-mode
    /// extraction
    pub fn all() -> [CodeType; 4] {
        [
            CodeType::Zoning,
            CodeType::Building,
            CodeType::Permit,
            CodeType::Business,
        ]
    }
}

impl std::fmt::Display for CodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Output of one translation run.
///
/// List fields hold non-empty, de-duplicated strings in the order first
/// encountered in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub plain_english: String,
    pub what_you_can_do: Vec<String>,
    pub what_you_cannot_do: Vec<String>,
    pub permits_required: Vec<String>,
    pub deadlines: Vec<String>,
    pub fees: Vec<String>,
    pub contact_info: Vec<String>,
    pub next_steps: Vec<String>,
    pub confidence_score: f32,
    pub code_type: CodeType,
    pub municipality: String,
}

impl TranslationResult {
    /// Degenerate zero-confidence result for empty input
    pub fn empty(code_type: CodeType, municipality: &str) -> Self {
        Self {
            original_text: String::new(),
            plain_english: String::new(),
            what_you_can_do: Vec::new(),
            what_you_cannot_do: Vec::new(),
            permits_required: Vec::new(),
            deadlines: Vec::new(),
            fees: Vec::new(),
            contact_info: Vec::new(),
            next_steps: Vec::new(),
            confidence_score: 0.0,
            code_type,
            municipality: municipality.to_string(),
        }
    }

    /// True when no category produced any fact
    pub fn is_sparse(&self) -> bool {
        self.what_you_can_do.is_empty()
            && self.what_you_cannot_do.is_empty()
            && self.permits_required.is_empty()
            && self.deadlines.is_empty()
            && self.fees.is_empty()
            && self.contact_info.is_empty()
            && self.next_steps.is_empty()
    }
}
