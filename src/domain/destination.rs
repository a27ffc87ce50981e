use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    DescriptionText, DestinationId, DestinationName, ImageId, ImageUrl, PlaceName, Price,
};

/// A persisted travel destination.
///
/// The case-insensitive (city, country) pair acts as the natural dedup key;
/// no two rows should share it, although that is enforced by the lookup in
/// the materializer rather than by a database constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: DestinationName,
    pub country: PlaceName,
    pub city: PlaceName,
    pub region: PlaceName,
    pub description: DescriptionText,
    pub adult_price: Price,
    pub minor_price: Price,
    pub registered_at: NaiveDateTime,
}

/// Data required to insert a new [`Destination`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDestination {
    pub name: DestinationName,
    pub country: PlaceName,
    pub city: PlaceName,
    pub region: PlaceName,
    pub description: DescriptionText,
    pub adult_price: Price,
    pub minor_price: Price,
    pub registered_at: NaiveDateTime,
}

/// An image attached to a destination.
///
/// There is no uniqueness constraint on (destination, url); repeated
/// enrichment of the same destination may insert duplicate URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationImage {
    pub id: ImageId,
    pub destination_id: DestinationId,
    pub url: ImageUrl,
}
