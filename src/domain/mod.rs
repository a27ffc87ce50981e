//! Domain entities and value objects for the travel-planning core.

pub mod category;
pub mod destination;
pub mod facility;
pub mod poi;
pub mod suggestion;
pub mod types;
