use serde::{Deserialize, Serialize};

use crate::domain::types::{
    DescriptionText, DestinationId, ImageId, ImageUrl, PoiId, PoiKind, PoiName,
};

/// A point of interest owned by a destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: PoiId,
    pub destination_id: DestinationId,
    pub name: PoiName,
    pub description: Option<DescriptionText>,
    pub kind: Option<PoiKind>,
}

/// Data required to insert a new [`PointOfInterest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPointOfInterest {
    pub destination_id: DestinationId,
    pub name: PoiName,
    pub description: Option<DescriptionText>,
    pub kind: Option<PoiKind>,
}

/// An image attached to a point of interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiImage {
    pub id: ImageId,
    pub poi_id: PoiId,
    pub url: ImageUrl,
}
