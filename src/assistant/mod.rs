//! Interpretation of raw assistant output: extraction, structural
//! validation, envelope deserialization and action classification.

pub mod classify;
pub mod envelope;
pub mod extract;
pub mod validate;
