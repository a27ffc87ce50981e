//! Travel-plan suggestion materialization and the public-share toggle.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::assistant::envelope::SuggestionPayload;
use crate::domain::destination::NewDestination;
use crate::domain::suggestion::{NewSuggestion, Suggestion};
use crate::domain::types::{
    DescriptionText, DestinationId, DestinationName, PlaceName, Price, SuggestionId,
    SuggestionTitle, UserId,
};
use crate::repository::{DestinationReader, DestinationWriter, SuggestionReader, SuggestionWriter};
use crate::services::errors::{ProcessError, ServiceError, ServiceResult};
use crate::services::lookup;

/// Length of the generated share code, in base64 characters.
const SHARE_CODE_LEN: usize = 12;

/// Result of a successful suggestion materialization.
#[derive(Debug)]
pub struct MaterializedSuggestion {
    pub suggestion_id: SuggestionId,
    pub destination_id: DestinationId,
    pub message: String,
}

/// Materialize a travel-plan suggestion from an assistant payload.
///
/// The referenced destination is resolved by case-insensitive (city, country)
/// match; when absent, a minimal destination row is created without any
/// enrichment so the suggestion always has something to point at.
pub fn process_suggestion<R>(
    payload: &SuggestionPayload,
    ai_message: Option<&str>,
    user_id: UserId,
    repo: &R,
) -> Result<MaterializedSuggestion, ProcessError>
where
    R: DestinationReader + DestinationWriter + SuggestionWriter,
{
    let title = lookup::non_blank(payload.title.as_deref());
    let description = lookup::non_blank(payload.description.as_deref());
    let city = lookup::non_blank(payload.destination_city.as_deref());
    let country = lookup::non_blank(payload.destination_country.as_deref());

    let mut missing = Vec::new();
    if title.is_none() {
        missing.push("title");
    }
    if description.is_none() {
        missing.push("description");
    }
    if city.is_none() {
        missing.push("destination city");
    }
    if country.is_none() {
        missing.push("destination country");
    }
    let (Some(title), Some(description), Some(city), Some(country)) =
        (title, description, city, country)
    else {
        return Err(ProcessError::Validation { missing });
    };

    let destination_id = resolve_destination(payload, city, country, repo)
        .map_err(ProcessError::DestinationResolution)?;

    let new_suggestion = NewSuggestion {
        user_id,
        destination_id,
        title: SuggestionTitle::new(title)?,
        description: DescriptionText::new(description)?,
        estimated_budget: Price::new(payload.estimated_budget.unwrap_or(0.0)),
        ai_generated: true,
        is_public: payload.make_public.unwrap_or(false),
        created_at: Utc::now().naive_utc(),
    };

    let suggestion = repo.create_suggestion(&new_suggestion).map_err(|source| {
        log::error!("failed to create suggestion `{title}`: {source}");
        ProcessError::Persistence {
            context: format!("travel plan {title}"),
            source,
        }
    })?;

    let message = match ai_message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(message) => message.to_string(),
        None => format!("Your travel plan \"{title}\" has been saved!"),
    };

    Ok(MaterializedSuggestion {
        suggestion_id: suggestion.id,
        destination_id,
        message,
    })
}

/// Find the target destination, or create a bare row when it does not exist.
fn resolve_destination<R>(
    payload: &SuggestionPayload,
    city: &str,
    country: &str,
    repo: &R,
) -> Result<DestinationId, crate::repository::errors::RepositoryError>
where
    R: DestinationReader + DestinationWriter,
{
    let existing = repo.list_destinations()?;
    if let Some(found) = lookup::find_destination(&existing, city, country) {
        return Ok(found.id);
    }

    let name = lookup::non_blank(payload.destination_name.as_deref()).unwrap_or(city);
    let budget = Price::new(payload.estimated_budget.unwrap_or(0.0));
    let minimal = NewDestination {
        name: DestinationName::new(name)?,
        country: PlaceName::new(country)?,
        city: PlaceName::new(city)?,
        region: PlaceName::new("Unknown")?,
        description: DescriptionText::new(format!(
            "{name} is a travel destination in {city}, {country}."
        ))?,
        adult_price: budget,
        minor_price: Price::new(budget.get() / 2.0),
        registered_at: Utc::now().naive_utc(),
    };
    let created = repo.create_destination(&minimal)?;
    log::debug!(
        "created minimal destination {} for suggestion targeting {city}, {country}",
        created.id
    );
    Ok(created.id)
}

/// Derive the stable, URL-safe share code for a suggestion.
///
/// SHA-256 over `"{id}:{title}"`, base64url without padding, truncated. The
/// code is not meant to be secret, only unguessable enough to avoid trivial
/// enumeration of private plans.
pub fn derive_share_code(id: SuggestionId, title: &str) -> String {
    let digest = Sha256::digest(format!("{id}:{title}").as_bytes());
    let encoded = URL_SAFE_NO_PAD.encode(digest);
    encoded.chars().take(SHARE_CODE_LEN).collect()
}

/// Make a suggestion public, issuing its share code on first publish.
///
/// Republishing reuses the code already on the row so shared links stay valid.
pub fn publish_suggestion<R>(id: SuggestionId, repo: &R) -> ServiceResult<Suggestion>
where
    R: SuggestionReader + SuggestionWriter,
{
    let suggestion = repo
        .get_suggestion_by_id(id)
        .map_err(|e| {
            log::error!("failed to load suggestion {id}: {e}");
            ServiceError::Internal
        })?
        .ok_or(ServiceError::NotFound)?;

    let code = match &suggestion.share_code {
        Some(existing) => existing.clone(),
        None => derive_share_code(id, suggestion.title.as_str()),
    };

    let updated = repo
        .set_suggestion_visibility(id, true, Some(&code))
        .map_err(|e| {
            log::error!("failed to publish suggestion {id}: {e}");
            ServiceError::Internal
        })?;
    if updated == 0 {
        return Err(ServiceError::NotFound);
    }

    repo.get_suggestion_by_id(id)
        .map_err(|e| {
            log::error!("failed to reload suggestion {id}: {e}");
            ServiceError::Internal
        })?
        .ok_or(ServiceError::NotFound)
}

/// Make a suggestion private again.
///
/// The share code stays on the row; a later republish revives the same link.
/// Returns `true` when a row was updated.
pub fn unpublish_suggestion<R>(id: SuggestionId, repo: &R) -> ServiceResult<bool>
where
    R: SuggestionWriter,
{
    let updated = repo.set_suggestion_visibility(id, false, None).map_err(|e| {
        log::error!("failed to unpublish suggestion {id}: {e}");
        ServiceError::Internal
    })?;
    Ok(updated > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;

    fn rome_payload() -> SuggestionPayload {
        SuggestionPayload {
            title: Some("Weekend in Rome".to_string()),
            estimated_budget: Some(800.0),
            description: Some("Two days of ruins and pasta".to_string()),
            destination_name: Some("Rome".to_string()),
            destination_country: Some("Italy".to_string()),
            destination_city: Some("Rome".to_string()),
            make_public: None,
            travel_date: None,
        }
    }

    fn user() -> UserId {
        UserId::new(7).unwrap()
    }

    #[test]
    fn creates_minimal_destination_with_halved_minor_price() {
        let repo = TestRepository::new();

        let outcome = process_suggestion(&rome_payload(), Some("Saved!"), user(), &repo).unwrap();

        assert_eq!(outcome.message, "Saved!");

        let destinations = repo.destinations();
        assert_eq!(destinations.len(), 1);
        assert_eq!(destinations[0].name, "Rome");
        assert_eq!(destinations[0].region, "Unknown");
        assert_eq!(destinations[0].adult_price, 800.0);
        assert_eq!(destinations[0].minor_price, 400.0);

        let suggestions = repo.suggestions();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].destination_id, outcome.destination_id);
        assert!(suggestions[0].ai_generated);
        assert!(!suggestions[0].is_public);
        assert!(suggestions[0].share_code.is_none());
    }

    #[test]
    fn reuses_existing_destination() {
        let repo = TestRepository::new();
        let first = process_suggestion(&rome_payload(), None, user(), &repo).unwrap();

        let mut payload = rome_payload();
        payload.destination_city = Some(" ROME ".to_string());
        payload.destination_country = Some("italy".to_string());
        let second = process_suggestion(&payload, None, user(), &repo).unwrap();

        assert_eq!(second.destination_id, first.destination_id);
        assert_eq!(repo.destinations().len(), 1);
        assert_eq!(repo.suggestions().len(), 2);
    }

    #[test]
    fn synthesizes_message_when_model_supplies_none() {
        let repo = TestRepository::new();

        let outcome = process_suggestion(&rome_payload(), None, user(), &repo).unwrap();

        assert_eq!(
            outcome.message,
            "Your travel plan \"Weekend in Rome\" has been saved!"
        );
    }

    #[test]
    fn validation_names_missing_fields() {
        let payload = SuggestionPayload {
            title: Some("Weekend in Rome".to_string()),
            ..SuggestionPayload::default()
        };

        let err = process_suggestion(&payload, None, user(), &TestRepository::new()).unwrap_err();

        match err {
            ProcessError::Validation { missing } => {
                assert_eq!(
                    missing,
                    vec!["description", "destination city", "destination country"]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn insert_failure_surfaces_as_persistence_error() {
        let repo = TestRepository::new().failing_suggestion_inserts();

        let err = process_suggestion(&rome_payload(), None, user(), &repo).unwrap_err();

        assert!(matches!(err, ProcessError::Persistence { .. }));
        // The resolved destination row remains; only the suggestion failed.
        assert_eq!(repo.destinations().len(), 1);
        assert!(repo.suggestions().is_empty());
    }

    #[test]
    fn share_code_is_short_stable_and_url_safe() {
        let id = SuggestionId::new(42).unwrap();

        let a = derive_share_code(id, "Weekend in Rome");
        let b = derive_share_code(id, "Weekend in Rome");

        assert_eq!(a, b);
        assert_eq!(a.len(), SHARE_CODE_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

        let other = derive_share_code(SuggestionId::new(43).unwrap(), "Weekend in Rome");
        assert_ne!(a, other);
    }

    #[test]
    fn publish_issues_code_once_and_republish_reuses_it() {
        let repo = TestRepository::new();
        let outcome = process_suggestion(&rome_payload(), None, user(), &repo).unwrap();

        let published = publish_suggestion(outcome.suggestion_id, &repo).unwrap();
        assert!(published.is_public);
        let code = published.share_code.clone().unwrap();
        assert_eq!(code.len(), SHARE_CODE_LEN);

        assert!(unpublish_suggestion(outcome.suggestion_id, &repo).unwrap());
        let private = repo.suggestions().remove(0);
        assert!(!private.is_public);
        // The code survives unpublish so old links work again on republish.
        assert_eq!(private.share_code.as_deref(), Some(code.as_str()));

        let republished = publish_suggestion(outcome.suggestion_id, &repo).unwrap();
        assert_eq!(republished.share_code.as_deref(), Some(code.as_str()));
    }

    #[test]
    fn publish_missing_suggestion_is_not_found() {
        let repo = TestRepository::new();

        let err = publish_suggestion(SuggestionId::new(999).unwrap(), &repo).unwrap_err();

        assert!(matches!(err, ServiceError::NotFound));
    }
}
