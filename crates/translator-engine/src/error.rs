//! Error taxonomy for the translation engine
//!
//! Both variants are recoverable: an unrecognized code type falls back to
//! union-mode extraction, and empty input yields a zero-confidence result.

use muni_types::CodeType;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unrecognized code type '{0}'")]
    InvalidCodeType(String),
    #[error("input text is empty")]
    EmptyInput,
}

/// Parse a code-type label, surfacing [`TranslateError::InvalidCodeType`]
/// for labels outside the known set
pub fn resolve_code_type(label: &str) -> Result<CodeType, TranslateError> {
    CodeType::parse_code(label)
        .ok_or_else(|| TranslateError::InvalidCodeType(label.to_string()))
}

/// Reject empty or whitespace-only input
pub fn check_input(text: &str) -> Result<(), TranslateError> {
    if text.trim().is_empty() {
        Err(TranslateError::EmptyInput)
    } else {
        Ok(())
    }
}
