//! Diesel row structs and conversions to/from domain entities.

pub mod category;
pub mod config;
pub mod destination;
pub mod facility;
pub mod poi;
pub mod suggestion;
