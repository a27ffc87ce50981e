use diesel::prelude::*;

use crate::domain::poi::{
    NewPointOfInterest as DomainNewPointOfInterest, PoiImage as DomainPoiImage,
    PointOfInterest as DomainPointOfInterest,
};
use crate::domain::types::{
    DescriptionText, ImageUrl, PoiId, PoiKind, PoiName, TypeConstraintError,
};

/// Diesel model representing the `points_of_interest` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::points_of_interest)]
pub struct PointOfInterest {
    pub id: i32,
    pub destination_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<String>,
}

/// Insertable form of [`PointOfInterest`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::points_of_interest)]
pub struct NewPointOfInterest {
    pub id: i32,
    pub destination_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<String>,
}

impl TryFrom<PointOfInterest> for DomainPointOfInterest {
    type Error = TypeConstraintError;

    fn try_from(poi: PointOfInterest) -> Result<Self, Self::Error> {
        Ok(Self {
            id: poi.id.try_into()?,
            destination_id: poi.destination_id.try_into()?,
            name: PoiName::new(poi.name)?,
            description: poi
                .description
                .filter(|d| !d.trim().is_empty())
                .map(DescriptionText::new)
                .transpose()?,
            kind: poi
                .kind
                .filter(|k| !k.trim().is_empty())
                .map(PoiKind::new)
                .transpose()?,
        })
    }
}

impl From<(PoiId, DomainNewPointOfInterest)> for NewPointOfInterest {
    fn from((id, poi): (PoiId, DomainNewPointOfInterest)) -> Self {
        Self {
            id: id.get(),
            destination_id: poi.destination_id.get(),
            name: poi.name.into_inner(),
            description: poi.description.map(DescriptionText::into_inner),
            kind: poi.kind.map(PoiKind::into_inner),
        }
    }
}

/// Diesel model representing the `poi_images` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::poi_images)]
pub struct PoiImage {
    pub id: i32,
    pub poi_id: i32,
    pub url: String,
}

/// Insertable form of [`PoiImage`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::poi_images)]
pub struct NewPoiImage {
    pub id: i32,
    pub poi_id: i32,
    pub url: String,
}

impl TryFrom<PoiImage> for DomainPoiImage {
    type Error = TypeConstraintError;

    fn try_from(image: PoiImage) -> Result<Self, Self::Error> {
        Ok(Self {
            id: image.id.try_into()?,
            poi_id: image.poi_id.try_into()?,
            url: ImageUrl::new(image.url)?,
        })
    }
}
