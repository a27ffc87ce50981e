//! Service layer: free functions generic over the repository traits.

pub mod assistant;
pub mod chat;
pub mod destinations;
pub mod errors;
pub mod lookup;
pub mod suggestions;

pub use errors::{ServiceError, ServiceResult};
