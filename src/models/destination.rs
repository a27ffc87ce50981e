use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::destination::{
    Destination as DomainDestination, DestinationImage as DomainDestinationImage,
    NewDestination as DomainNewDestination,
};
use crate::domain::types::{
    DescriptionText, DestinationId, DestinationName, ImageUrl, PlaceName, Price,
    TypeConstraintError,
};

/// Diesel model representing the `destinations` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::destinations)]
pub struct Destination {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub region: String,
    pub description: String,
    pub adult_price: f64,
    pub minor_price: f64,
    pub registered_at: NaiveDateTime,
}

/// Insertable form of [`Destination`].
///
/// Carries an explicit `id`: the schema defines no identity column, so the
/// repository allocates identifiers before inserting.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::destinations)]
pub struct NewDestination {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub region: String,
    pub description: String,
    pub adult_price: f64,
    pub minor_price: f64,
    pub registered_at: NaiveDateTime,
}

impl TryFrom<Destination> for DomainDestination {
    type Error = TypeConstraintError;

    fn try_from(destination: Destination) -> Result<Self, Self::Error> {
        Ok(Self {
            id: destination.id.try_into()?,
            name: DestinationName::new(destination.name)?,
            country: PlaceName::new(destination.country)?,
            city: PlaceName::new(destination.city)?,
            region: PlaceName::new(destination.region)?,
            description: DescriptionText::new(destination.description)?,
            adult_price: Price::new(destination.adult_price),
            minor_price: Price::new(destination.minor_price),
            registered_at: destination.registered_at,
        })
    }
}

impl From<(DestinationId, DomainNewDestination)> for NewDestination {
    fn from((id, destination): (DestinationId, DomainNewDestination)) -> Self {
        Self {
            id: id.get(),
            name: destination.name.into_inner(),
            country: destination.country.into_inner(),
            city: destination.city.into_inner(),
            region: destination.region.into_inner(),
            description: destination.description.into_inner(),
            adult_price: destination.adult_price.get(),
            minor_price: destination.minor_price.get(),
            registered_at: destination.registered_at,
        }
    }
}

/// Diesel model representing the `destination_images` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::destination_images)]
pub struct DestinationImage {
    pub id: i32,
    pub destination_id: i32,
    pub url: String,
}

/// Insertable form of [`DestinationImage`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::destination_images)]
pub struct NewDestinationImage {
    pub id: i32,
    pub destination_id: i32,
    pub url: String,
}

impl TryFrom<DestinationImage> for DomainDestinationImage {
    type Error = TypeConstraintError;

    fn try_from(image: DestinationImage) -> Result<Self, Self::Error> {
        Ok(Self {
            id: image.id.try_into()?,
            destination_id: image.destination_id.try_into()?,
            url: ImageUrl::new(image.url)?,
        })
    }
}
