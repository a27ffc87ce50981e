use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    DescriptionText, DestinationId, Price, SuggestionId, SuggestionTitle, UserId,
};

/// A user- or AI-authored travel plan referencing a destination.
///
/// `share_code`, when present, is non-reversibly derived from (id, title) and
/// is only generated when the suggestion transitions to public.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub user_id: UserId,
    pub destination_id: DestinationId,
    pub title: SuggestionTitle,
    pub description: DescriptionText,
    pub estimated_budget: Price,
    pub ai_generated: bool,
    pub is_public: bool,
    pub share_code: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Suggestion`].
///
/// The share code is never set at creation time; it is issued by the publish
/// toggle once the suggestion id is known.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewSuggestion {
    pub user_id: UserId,
    pub destination_id: DestinationId,
    pub title: SuggestionTitle,
    pub description: DescriptionText,
    pub estimated_budget: Price,
    pub ai_generated: bool,
    pub is_public: bool,
    pub created_at: NaiveDateTime,
}
