use diesel::prelude::*;

use crate::domain::facility::{Facility as DomainFacility, NewFacility as DomainNewFacility};
use crate::domain::types::{DescriptionText, FacilityId, FacilityName, TypeConstraintError};

/// Diesel model representing the `facilities` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::facilities)]
pub struct Facility {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Insertable form of [`Facility`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::facilities)]
pub struct NewFacility {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl TryFrom<Facility> for DomainFacility {
    type Error = TypeConstraintError;

    fn try_from(facility: Facility) -> Result<Self, Self::Error> {
        Ok(Self {
            id: facility.id.try_into()?,
            name: FacilityName::new(facility.name)?,
            description: facility
                .description
                .filter(|d| !d.trim().is_empty())
                .map(DescriptionText::new)
                .transpose()?,
        })
    }
}

impl From<(FacilityId, DomainNewFacility)> for NewFacility {
    fn from((id, facility): (FacilityId, DomainNewFacility)) -> Self {
        Self {
            id: id.get(),
            name: facility.name.into_inner(),
            description: facility.description.map(DescriptionText::into_inner),
        }
    }
}
