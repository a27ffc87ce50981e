//! Wire types for the JSON envelope returned by the travel assistant.
//!
//! The prompt contract uses Romanian field names; they are mapped to English
//! struct fields here and nowhere else. Every field is optional or defaulted
//! so that a sloppy model response still deserializes.

use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Top-level deserialized assistant response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AiEnvelope {
    pub action: Option<String>,
    pub success: Option<bool>,
    pub message: Option<String>,
    pub destination: Option<DestinationPayload>,
    pub suggestion: Option<SuggestionPayload>,
    pub suggestions: Option<Vec<DestinationIdea>>,
}

impl AiEnvelope {
    /// The model's own success flag; absent means success.
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(true)
    }

    /// The decoded action discriminant.
    pub fn action(&self) -> AssistantAction {
        AssistantAction::parse(self.action.as_deref())
    }

    /// The model message, `None` when blank.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Destination data supplied by the model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DestinationPayload {
    #[serde(rename = "denumire")]
    pub name: Option<String>,
    #[serde(rename = "tara")]
    pub country: Option<String>,
    #[serde(rename = "oras")]
    pub city: Option<String>,
    #[serde(rename = "regiune")]
    pub region: Option<String>,
    #[serde(rename = "descriere")]
    pub description: Option<String>,
    #[serde(rename = "pretAdult")]
    pub adult_price: Option<f64>,
    #[serde(rename = "pretMinor")]
    pub minor_price: Option<f64>,
    #[serde(rename = "categorii")]
    pub categories: Vec<String>,
    #[serde(rename = "facilitati")]
    pub facilities: Vec<String>,
    #[serde(rename = "puncteDeInteres")]
    pub points_of_interest: Vec<PoiPayload>,
    #[serde(rename = "photoSearchQueries")]
    pub photo_search_queries: Vec<String>,
}

/// Point-of-interest data nested in a destination payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PoiPayload {
    #[serde(rename = "denumire")]
    pub name: Option<String>,
    #[serde(rename = "descriere")]
    pub description: Option<String>,
    #[serde(rename = "tip")]
    pub kind: Option<String>,
    #[serde(rename = "photoSearchQueries")]
    pub photo_search_queries: Vec<String>,
}

/// Travel-plan suggestion data supplied by the model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuggestionPayload {
    #[serde(rename = "titlu")]
    pub title: Option<String>,
    #[serde(rename = "bugetEstimat")]
    pub estimated_budget: Option<f64>,
    #[serde(rename = "descriere")]
    pub description: Option<String>,
    #[serde(rename = "destinatieDenumire")]
    pub destination_name: Option<String>,
    #[serde(rename = "destinatieTara")]
    pub destination_country: Option<String>,
    #[serde(rename = "destinatieOras")]
    pub destination_city: Option<String>,
    #[serde(rename = "estePublic")]
    pub make_public: Option<bool>,
    #[serde(rename = "destinatieData")]
    pub travel_date: Option<String>,
}

/// Lightweight recommendation used by the ask-preference flow.
///
/// These are rendered to the user without any database writes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DestinationIdea {
    #[serde(rename = "destinatieDenumire")]
    pub name: Option<String>,
    #[serde(rename = "destinatieTara")]
    pub country: Option<String>,
    #[serde(rename = "destinatieOras")]
    pub city: Option<String>,
    #[serde(rename = "bugetEstimat")]
    pub estimated_budget: Option<f64>,
    #[serde(rename = "descriereScurta")]
    pub summary: Option<String>,
}

/// Closed set of assistant actions, decoded once at the classifier boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantAction {
    CreateDestination,
    CreateSuggestion,
    AskPreference,
    DestinationExists,
    GeneralChat,
    Error,
    /// Unrecognized or missing action, carrying the raw string.
    Unknown(String),
}

impl AssistantAction {
    /// Decode the envelope's `action` field, case-insensitively.
    pub fn parse(raw: Option<&str>) -> Self {
        let normalized = raw.unwrap_or_default().trim().to_ascii_lowercase();
        match normalized.as_str() {
            "create_destination" => Self::CreateDestination,
            "create_suggestion" => Self::CreateSuggestion,
            "ask_preference" => Self::AskPreference,
            "destination_exists" => Self::DestinationExists,
            "general_chat" => Self::GeneralChat,
            "error" => Self::Error,
            _ => Self::Unknown(normalized),
        }
    }
}

impl Display for AssistantAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDestination => write!(f, "create_destination"),
            Self::CreateSuggestion => write!(f, "create_suggestion"),
            Self::AskPreference => write!(f, "ask_preference"),
            Self::DestinationExists => write!(f, "destination_exists"),
            Self::GeneralChat => write!(f, "general_chat"),
            Self::Error => write!(f, "error"),
            Self::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_actions_case_insensitively() {
        assert_eq!(
            AssistantAction::parse(Some("Create_Destination")),
            AssistantAction::CreateDestination
        );
        assert_eq!(
            AssistantAction::parse(Some(" general_chat ")),
            AssistantAction::GeneralChat
        );
    }

    #[test]
    fn unknown_action_carries_raw_string() {
        assert_eq!(
            AssistantAction::parse(Some("make_coffee")),
            AssistantAction::Unknown("make_coffee".to_string())
        );
        assert_eq!(
            AssistantAction::parse(None),
            AssistantAction::Unknown(String::new())
        );
    }

    #[test]
    fn deserializes_full_destination_envelope() {
        let json = r#"{
            "action": "create_destination",
            "success": true,
            "message": "Great choice!",
            "destination": {
                "denumire": "Dubai",
                "tara": "UAE",
                "oras": "Dubai",
                "regiune": "Middle East",
                "descriere": "desc",
                "pretAdult": 2500,
                "pretMinor": 1500,
                "categorii": ["Lux"],
                "facilitati": ["Pool"],
                "puncteDeInteres": [
                    {"denumire": "Burj Khalifa", "descriere": "tower", "tip": "landmark",
                     "photoSearchQueries": ["Burj Khalifa"]}
                ],
                "photoSearchQueries": ["Dubai skyline"]
            }
        }"#;

        let envelope: AiEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.action(), AssistantAction::CreateDestination);
        assert_eq!(envelope.message(), Some("Great choice!"));

        let destination = envelope.destination.unwrap();
        assert_eq!(destination.name.as_deref(), Some("Dubai"));
        assert_eq!(destination.adult_price, Some(2500.0));
        assert_eq!(destination.categories, vec!["Lux"]);
        assert_eq!(destination.points_of_interest.len(), 1);
        assert_eq!(
            destination.points_of_interest[0].name.as_deref(),
            Some("Burj Khalifa")
        );
    }

    #[test]
    fn deserializes_sparse_envelope() {
        let envelope: AiEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.action(), AssistantAction::Unknown(String::new()));
        assert!(envelope.destination.is_none());
        assert!(envelope.message().is_none());
    }

    #[test]
    fn blank_message_reads_as_none() {
        let envelope: AiEnvelope =
            serde_json::from_str(r#"{"message": "   "}"#).unwrap();
        assert!(envelope.message().is_none());
    }

    #[test]
    fn deserializes_suggestion_payload() {
        let json = r#"{
            "action": "create_suggestion",
            "suggestion": {
                "titlu": "Weekend in Rome",
                "bugetEstimat": 800,
                "descriere": "Two days of ruins and pasta",
                "destinatieDenumire": "Rome",
                "destinatieTara": "Italy",
                "destinatieOras": "Rome",
                "estePublic": true
            }
        }"#;

        let envelope: AiEnvelope = serde_json::from_str(json).unwrap();
        let suggestion = envelope.suggestion.unwrap();
        assert_eq!(suggestion.title.as_deref(), Some("Weekend in Rome"));
        assert_eq!(suggestion.estimated_budget, Some(800.0));
        assert_eq!(suggestion.make_public, Some(true));
    }
}
