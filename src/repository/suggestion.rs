use diesel::prelude::*;

use crate::domain::suggestion::{NewSuggestion, Suggestion};
use crate::domain::types::SuggestionId;
use crate::models::suggestion::{NewSuggestion as DbNewSuggestion, Suggestion as DbSuggestion};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, SuggestionReader, SuggestionWriter};

impl SuggestionReader for DieselRepository {
    fn get_suggestion_by_id(&self, id: SuggestionId) -> RepositoryResult<Option<Suggestion>> {
        use crate::schema::suggestions;

        let mut conn = self.conn()?;

        let suggestion = suggestions::table
            .filter(suggestions::id.eq(id.get()))
            .first::<DbSuggestion>(&mut conn)
            .optional()?;

        let suggestion = suggestion.map(TryInto::try_into).transpose()?;
        Ok(suggestion)
    }
}

impl SuggestionWriter for DieselRepository {
    fn create_suggestion(&self, suggestion: &NewSuggestion) -> RepositoryResult<Suggestion> {
        use crate::schema::suggestions;

        let mut conn = self.conn()?;

        let id = conn.transaction::<_, RepositoryError, _>(|conn| {
            let current_max = suggestions::table
                .select(diesel::dsl::max(suggestions::id))
                .first::<Option<i32>>(conn)?;

            let id = self
                .row_ids
                .allocate("suggestions", current_max, |candidate| {
                    Ok(diesel::select(diesel::dsl::exists(
                        suggestions::table.filter(suggestions::id.eq(candidate)),
                    ))
                    .get_result::<bool>(conn)?)
                })?;

            let db_suggestion = DbNewSuggestion::from((SuggestionId::new(id)?, suggestion.clone()));
            diesel::insert_into(suggestions::table)
                .values(db_suggestion)
                .execute(conn)?;

            Ok(id)
        })?;

        Ok(Suggestion {
            id: SuggestionId::new(id)?,
            user_id: suggestion.user_id,
            destination_id: suggestion.destination_id,
            title: suggestion.title.clone(),
            description: suggestion.description.clone(),
            estimated_budget: suggestion.estimated_budget,
            ai_generated: suggestion.ai_generated,
            is_public: suggestion.is_public,
            share_code: None,
            created_at: suggestion.created_at,
        })
    }

    fn set_suggestion_visibility(
        &self,
        id: SuggestionId,
        is_public: bool,
        share_code: Option<&str>,
    ) -> RepositoryResult<usize> {
        use crate::schema::suggestions;

        let mut conn = self.conn()?;

        let affected = match share_code {
            Some(code) => diesel::update(suggestions::table.filter(suggestions::id.eq(id.get())))
                .set((
                    suggestions::is_public.eq(is_public),
                    suggestions::share_code.eq(code),
                ))
                .execute(&mut conn)?,
            None => diesel::update(suggestions::table.filter(suggestions::id.eq(id.get())))
                .set(suggestions::is_public.eq(is_public))
                .execute(&mut conn)?,
        };

        Ok(affected)
    }
}
