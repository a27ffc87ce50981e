//! Core library for the tripmind travel planner.
//!
//! Turns free-form AI assistant replies into persisted destinations and
//! travel-plan suggestions. The pipeline runs extraction, structural
//! validation, classification and materialization in that order, and always
//! returns a uniform result the conversational surface can render directly.
//!
//! Everything here is synchronous; callers that serve requests concurrently
//! own their threading (the repository pool and the photo client are both
//! cheap to clone or share).

pub mod assistant;
pub mod db;
pub mod domain;
pub mod llm;
pub mod models;
pub mod photos;
pub mod repository;
pub mod schema;
pub mod services;
