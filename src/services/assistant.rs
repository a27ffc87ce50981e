//! Entry points turning a raw model reply into persisted records.
//!
//! Both entry points are total over their input: any malformed reply becomes
//! a failed result with a user-facing message rather than an error, so the
//! conversational surface never has to handle a second error channel.

use crate::assistant::classify::{Classification, ClassifyError, classify};
use crate::assistant::envelope::{AiEnvelope, AssistantAction, DestinationIdea};
use crate::assistant::extract::extract_json;
use crate::assistant::validate::is_plausible_json;
use crate::domain::types::{DestinationId, SuggestionId, UserId};
use crate::photos::PhotoSearcher;
use crate::repository::{
    CategoryReader, DestinationReader, DestinationWriter, FacilityReader, FacilityWriter,
    LinkReader, LinkWriter, PoiWriter, SuggestionWriter,
};
use crate::services::destinations::{EnrichmentFailure, process_destination};
use crate::services::errors::ProcessError;
use crate::services::lookup;
use crate::services::suggestions::process_suggestion;

/// Shown when the reply cannot be read as JSON at all.
const MSG_UNREADABLE: &str = "I couldn't understand the assistant's reply. Please try again.";
/// Shown when the reply is JSON-shaped but structurally mangled.
const MSG_GARBLED: &str = "The assistant's reply came back garbled. Try asking more specifically.";

/// Uniform outcome of processing a destination-flow reply.
#[derive(Debug, Clone, Default)]
pub struct ProcessResult {
    pub success: bool,
    pub message: String,
    pub destination_id: Option<DestinationId>,
    pub is_general_chat: bool,
    pub is_ask_preference: bool,
    pub ideas: Vec<DestinationIdea>,
}

impl ProcessResult {
    fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    fn success<S: Into<String>>(message: S) -> Self {
        Self {
            success: true,
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Uniform outcome of processing a suggestion-flow reply.
#[derive(Debug, Clone, Default)]
pub struct SuggestionProcessResult {
    pub success: bool,
    pub message: String,
    pub suggestion_id: Option<SuggestionId>,
    pub destination_id: Option<DestinationId>,
}

impl SuggestionProcessResult {
    fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Process a raw model reply from the destination conversation flow.
pub fn process_ai_response<R, P>(raw: &str, repo: &R, photos: &P) -> ProcessResult
where
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
    let envelope = match parse_envelope(raw) {
        Ok(envelope) => envelope,
        Err(message) => return ProcessResult::failure(message),
    };

    let classification = match classify(envelope) {
        Ok(classification) => classification,
        Err(ClassifyError::UnknownAction(action)) => {
            log::warn!("unrecognized assistant action `{action}`");
            return ProcessResult::failure(format!(
                "I didn't recognize what the assistant asked for (`{action}`). Please try again."
            ));
        }
        Err(e @ ClassifyError::MissingDestination(_)) => {
            log::warn!("{e}");
            return ProcessResult::failure(
                "The assistant's reply was missing the destination details. Please try again.",
            );
        }
    };

    match classification {
        Classification::CreateDestination { payload, message } => {
            match process_destination(&payload, message.as_deref(), repo, photos) {
                Ok(outcome) => {
                    let mut message = outcome.message;
                    message.push_str(&warning_suffix(&outcome.enrichment_failures));
                    ProcessResult {
                        destination_id: Some(outcome.destination_id),
                        ..ProcessResult::success(message)
                    }
                }
                Err(e) => failure_from_process_error(e),
            }
        }
        Classification::DestinationExists { payload, message } => {
            let city = lookup::non_blank(payload.city.as_deref()).unwrap_or_default();
            let country = lookup::non_blank(payload.country.as_deref()).unwrap_or_default();
            let destination_id = match repo.list_destinations() {
                Ok(destinations) => {
                    lookup::find_destination(&destinations, city, country).map(|d| d.id)
                }
                Err(e) => {
                    log::error!("failed to list destinations: {e}");
                    None
                }
            };
            ProcessResult {
                destination_id,
                ..ProcessResult::success(
                    message.unwrap_or_else(|| "That destination is already on the list.".to_string()),
                )
            }
        }
        Classification::SuggestionRequested { message } => ProcessResult::failure(
            message.unwrap_or_else(|| {
                "That looks like a travel plan; please save it from the plans screen.".to_string()
            }),
        ),
        Classification::AskPreference { message, ideas } => ProcessResult {
            is_ask_preference: true,
            ideas,
            ..ProcessResult::success(
                message.unwrap_or_else(|| "Here are a few ideas to choose from.".to_string()),
            )
        },
        Classification::GeneralChat { message } => ProcessResult {
            is_general_chat: true,
            ..ProcessResult::success(
                message.unwrap_or_else(|| "Happy to help with your travel plans!".to_string()),
            )
        },
        Classification::ModelReportedError { message } => ProcessResult::failure(
            message.unwrap_or_else(|| "The assistant reported a problem. Please try again.".to_string()),
        ),
        Classification::ModelReportedFailure { message } => ProcessResult::failure(
            message
                .unwrap_or_else(|| "The assistant could not complete that request.".to_string()),
        ),
    }
}

/// Process a raw model reply from the suggestion (travel plan) flow.
pub fn process_ai_suggestion<R>(raw: &str, user_id: UserId, repo: &R) -> SuggestionProcessResult
where
    R: DestinationReader + DestinationWriter + SuggestionWriter,
{
    let envelope = match parse_envelope(raw) {
        Ok(envelope) => envelope,
        Err(message) => return SuggestionProcessResult::failure(message),
    };

    if !envelope.is_success() || envelope.action() == AssistantAction::Error {
        return SuggestionProcessResult::failure(
            envelope
                .message()
                .unwrap_or("The assistant could not complete that request.")
                .to_string(),
        );
    }

    let message = envelope.message().map(str::to_string);
    let Some(payload) = envelope.suggestion else {
        log::warn!("suggestion reply carried no suggestion payload");
        return SuggestionProcessResult::failure(
            "The assistant's reply was missing the travel plan details. Please try again.",
        );
    };

    match process_suggestion(&payload, message.as_deref(), user_id, repo) {
        Ok(outcome) => SuggestionProcessResult {
            success: true,
            message: outcome.message,
            suggestion_id: Some(outcome.suggestion_id),
            destination_id: Some(outcome.destination_id),
        },
        Err(e) => SuggestionProcessResult::failure(process_error_message(e)),
    }
}

/// Extract, structurally validate and deserialize a raw reply.
///
/// On failure returns the user-facing message to respond with.
fn parse_envelope(raw: &str) -> Result<AiEnvelope, &'static str> {
    let extracted = extract_json(raw);
    if !extracted.contains('{') {
        log::warn!("model reply contained no JSON object: {raw:?}");
        return Err(MSG_UNREADABLE);
    }
    if !is_plausible_json(&extracted) {
        log::warn!("model reply failed structural checks: {extracted:?}");
        return Err(MSG_GARBLED);
    }
    serde_json::from_str(&extracted).map_err(|e| {
        log::warn!("model reply failed to deserialize: {e}; text: {extracted:?}");
        MSG_UNREADABLE
    })
}

/// Append a short note naming the enrichment steps that had problems.
fn warning_suffix(failures: &[EnrichmentFailure]) -> String {
    if failures.is_empty() {
        return String::new();
    }
    let mut steps: Vec<&str> = Vec::new();
    for failure in failures {
        let label = failure.step.label();
        if !steps.contains(&label) {
            steps.push(label);
        }
    }
    format!(" Note: some details could not be added ({}).", steps.join(", "))
}

fn failure_from_process_error(error: ProcessError) -> ProcessResult {
    ProcessResult::failure(process_error_message(error))
}

fn process_error_message(error: ProcessError) -> String {
    match error {
        ProcessError::Validation { missing } => format!(
            "The assistant's reply was missing some details ({}). Please try rephrasing.",
            missing.join(", ")
        ),
        ProcessError::Persistence { context, source } => {
            log::error!("persistence failure for {context}: {source}");
            format!("Something went wrong while saving {context}. Please try again.")
        }
        ProcessError::DestinationResolution(source) => {
            log::error!("destination resolution failure: {source}");
            "I could not find or create the destination for this plan. Please try again."
                .to_string()
        }
        ProcessError::Constraint(source) => {
            log::warn!("constraint violation in assistant payload: {source}");
            "Some of the assistant's details were invalid. Please try again.".to_string()
        }
    }
}
