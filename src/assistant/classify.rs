//! Dispatch of a deserialized envelope onto the known assistant flows.

use thiserror::Error;

use crate::assistant::envelope::{
    AiEnvelope, AssistantAction, DestinationIdea, DestinationPayload,
};

/// Outcome of classifying a validated envelope.
///
/// The destination entry point handles every variant except
/// `SuggestionRequested`, which it rejects: suggestions are materialized
/// through their own entry point, invoked from a different conversational
/// flow.
#[derive(Debug, Clone)]
pub enum Classification {
    /// Materialize a new destination.
    CreateDestination {
        payload: DestinationPayload,
        message: Option<String>,
    },
    /// The model wants a suggestion created; not handled here.
    SuggestionRequested { message: Option<String> },
    /// Render lightweight recommendations without touching the database.
    AskPreference {
        message: Option<String>,
        ideas: Vec<DestinationIdea>,
    },
    /// The destination already exists; resolve its id.
    DestinationExists {
        payload: DestinationPayload,
        message: Option<String>,
    },
    /// Ordinary conversation, no destination involved.
    GeneralChat { message: Option<String> },
    /// The model reported an error of its own.
    ModelReportedError { message: Option<String> },
    /// The envelope's own success flag was false.
    ModelReportedFailure { message: Option<String> },
}

/// Structural problems with an otherwise well-formed envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("unrecognized assistant action `{0}`")]
    UnknownAction(String),
    #[error("assistant action `{0}` is missing its destination payload")]
    MissingDestination(&'static str),
}

/// Classify a deserialized envelope.
///
/// A false `success` flag short-circuits before action dispatch, per the
/// prompt contract: the model's own message takes precedence over whatever
/// action it also claimed.
pub fn classify(envelope: AiEnvelope) -> Result<Classification, ClassifyError> {
    if !envelope.is_success() {
        return Ok(Classification::ModelReportedFailure {
            message: envelope.message().map(str::to_string),
        });
    }

    let message = envelope.message().map(str::to_string);

    match envelope.action() {
        AssistantAction::CreateDestination => match envelope.destination {
            Some(payload) => Ok(Classification::CreateDestination { payload, message }),
            None => Err(ClassifyError::MissingDestination("create_destination")),
        },
        AssistantAction::CreateSuggestion => {
            Ok(Classification::SuggestionRequested { message })
        }
        AssistantAction::AskPreference => Ok(Classification::AskPreference {
            message,
            ideas: envelope.suggestions.unwrap_or_default(),
        }),
        AssistantAction::DestinationExists => match envelope.destination {
            Some(payload) => Ok(Classification::DestinationExists { payload, message }),
            None => Err(ClassifyError::MissingDestination("destination_exists")),
        },
        AssistantAction::GeneralChat => Ok(Classification::GeneralChat { message }),
        AssistantAction::Error => Ok(Classification::ModelReportedError { message }),
        AssistantAction::Unknown(raw) => Err(ClassifyError::UnknownAction(raw)),
    }
}
