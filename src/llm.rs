//! Abstract LLM collaborator.
//!
//! The model call itself is a black box: text in, unconstrained text out.
//! Whether the returned text honors the JSON envelope contract is checked
//! downstream by the assistant pipeline, never assumed here.

use thiserror::Error;

/// Errors surfaced by a chat-model backend.
#[derive(Debug, Error)]
pub enum ChatModelError {
    #[error("chat model backend error: {0}")]
    Backend(String),
}

/// One turn of prior conversation passed back to the model for context.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A chat model able to answer travel queries and emit the destination
/// creation envelope.
pub trait ChatModel {
    /// Ask the model to respond to `user_query`, given summaries of the
    /// existing destinations and the available category vocabulary.
    ///
    /// Returns raw text that may or may not contain valid JSON.
    fn destination_creation_response(
        &self,
        user_query: &str,
        destinations_summary: &str,
        categories_summary: &str,
        history: &[ChatTurn],
    ) -> Result<String, ChatModelError>;
}
