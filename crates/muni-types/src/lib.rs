pub mod types;

pub use types::{CodeType, TranslationResult};
