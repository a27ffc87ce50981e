use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

/// Generic error type used by simple service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Fatal errors in the materialization pipeline.
///
/// Enrichment failures are deliberately *not* represented here: they are
/// non-fatal and travel back to the caller as a list of
/// [`crate::services::destinations::EnrichmentFailure`] values instead.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Required business fields were missing from the payload.
    #[error("missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<&'static str> },
    /// An insert or update failed; fatal for the current flow.
    #[error("failed to save {context}")]
    Persistence {
        context: String,
        #[source]
        source: RepositoryError,
    },
    /// The backing destination for a suggestion could not be resolved.
    #[error("could not find or create a destination for this plan")]
    DestinationResolution(#[source] RepositoryError),
    /// A payload value violated a domain type constraint.
    #[error(transparent)]
    Constraint(#[from] TypeConstraintError),
}
