use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::suggestion::{
    NewSuggestion as DomainNewSuggestion, Suggestion as DomainSuggestion,
};
use crate::domain::types::{
    DescriptionText, Price, SuggestionId, SuggestionTitle, TypeConstraintError,
};

/// Diesel model representing the `suggestions` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::suggestions)]
pub struct Suggestion {
    pub id: i32,
    pub user_id: i32,
    pub destination_id: i32,
    pub title: String,
    pub description: String,
    pub estimated_budget: f64,
    pub ai_generated: bool,
    pub is_public: bool,
    pub share_code: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Suggestion`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::suggestions)]
pub struct NewSuggestion {
    pub id: i32,
    pub user_id: i32,
    pub destination_id: i32,
    pub title: String,
    pub description: String,
    pub estimated_budget: f64,
    pub ai_generated: bool,
    pub is_public: bool,
    pub share_code: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Suggestion> for DomainSuggestion {
    type Error = TypeConstraintError;

    fn try_from(suggestion: Suggestion) -> Result<Self, Self::Error> {
        Ok(Self {
            id: suggestion.id.try_into()?,
            user_id: suggestion.user_id.try_into()?,
            destination_id: suggestion.destination_id.try_into()?,
            title: SuggestionTitle::new(suggestion.title)?,
            description: DescriptionText::new(suggestion.description)?,
            estimated_budget: Price::new(suggestion.estimated_budget),
            ai_generated: suggestion.ai_generated,
            is_public: suggestion.is_public,
            share_code: suggestion.share_code,
            created_at: suggestion.created_at,
        })
    }
}

impl From<(SuggestionId, DomainNewSuggestion)> for NewSuggestion {
    fn from((id, suggestion): (SuggestionId, DomainNewSuggestion)) -> Self {
        Self {
            id: id.get(),
            user_id: suggestion.user_id.get(),
            destination_id: suggestion.destination_id.get(),
            title: suggestion.title.into_inner(),
            description: suggestion.description.into_inner(),
            estimated_budget: suggestion.estimated_budget.get(),
            ai_generated: suggestion.ai_generated,
            is_public: suggestion.is_public,
            share_code: None,
            created_at: suggestion.created_at,
        }
    }
}
