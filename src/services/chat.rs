//! Destination-flow chat orchestration: prompt context, model call, pipeline.

use crate::llm::{ChatModel, ChatTurn};
use crate::photos::PhotoSearcher;
use crate::repository::{
    CategoryReader, DestinationReader, DestinationWriter, FacilityReader, FacilityWriter,
    LinkReader, LinkWriter, PoiWriter,
};
use crate::services::assistant::{ProcessResult, process_ai_response};

/// Handle one user turn of the destination conversation.
///
/// Builds the catalog summaries the prompt contract expects, calls the model,
/// and feeds its raw reply through the materialization pipeline. A backend
/// failure becomes a failed [`ProcessResult`] so callers see one result shape.
pub fn handle_destination_chat<M, R, P>(
    user_query: &str,
    history: &[ChatTurn],
    model: &M,
    repo: &R,
    photos: &P,
) -> ProcessResult
where
    M: ChatModel + ?Sized,
    R: DestinationReader
        + DestinationWriter
        + CategoryReader
        + FacilityReader
        + FacilityWriter
        + LinkReader
        + LinkWriter
        + PoiWriter,
    P: PhotoSearcher + ?Sized,
{
    let destinations_summary = match repo.list_destinations() {
        Ok(destinations) => destinations
            .iter()
            .map(|d| format!("{} ({}, {})", d.name, d.city, d.country))
            .collect::<Vec<_>>()
            .join("; "),
        Err(e) => {
            log::error!("failed to build destination summary: {e}");
            String::new()
        }
    };
    let categories_summary = match repo.list_categories() {
        Ok(categories) => categories
            .iter()
            .map(|c| c.name.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        Err(e) => {
            log::error!("failed to build category summary: {e}");
            String::new()
        }
    };

    let raw = match model.destination_creation_response(
        user_query,
        &destinations_summary,
        &categories_summary,
        history,
    ) {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("chat model call failed: {e}");
            return ProcessResult {
                message: "I couldn't reach the travel assistant. Please try again in a moment."
                    .to_string(),
                ..ProcessResult::default()
            };
        }
    };

    process_ai_response(&raw, repo, photos)
}
