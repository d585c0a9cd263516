//! Sentence-level category rules

pub mod next_steps;
pub mod permits;
pub mod polarity;
