use serde::{Deserialize, Serialize};

use crate::domain::types::{DescriptionText, FacilityId, FacilityName};

/// A facility available at a destination (pool, spa, parking, ...).
///
/// Unlike categories, facilities are an open vocabulary: the materializer
/// creates missing facilities on demand with an auto-generated description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: FacilityName,
    pub description: Option<DescriptionText>,
}

/// Data required to insert a new [`Facility`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewFacility {
    pub name: FacilityName,
    pub description: Option<DescriptionText>,
}
