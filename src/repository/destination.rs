use diesel::prelude::*;

use crate::domain::destination::{Destination, DestinationImage, NewDestination};
use crate::domain::types::{DestinationId, ImageId, ImageUrl};
use crate::models::destination::{
    Destination as DbDestination, DestinationImage as DbDestinationImage,
    NewDestination as DbNewDestination, NewDestinationImage as DbNewDestinationImage,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DestinationReader, DestinationWriter, DieselRepository};

impl DestinationReader for DieselRepository {
    fn list_destinations(&self) -> RepositoryResult<Vec<Destination>> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;

        let items = destinations::table
            .order(destinations::name.asc())
            .load::<DbDestination>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Destination>, _>>()?;

        Ok(items)
    }

    fn get_destination_by_id(&self, id: DestinationId) -> RepositoryResult<Option<Destination>> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;

        let destination = destinations::table
            .filter(destinations::id.eq(id.get()))
            .first::<DbDestination>(&mut conn)
            .optional()?;

        let destination = destination.map(TryInto::try_into).transpose()?;
        Ok(destination)
    }

    fn list_destination_images(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<DestinationImage>> {
        use crate::schema::destination_images;

        let mut conn = self.conn()?;

        let items = destination_images::table
            .filter(destination_images::destination_id.eq(destination_id.get()))
            .order(destination_images::id.asc())
            .load::<DbDestinationImage>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<DestinationImage>, _>>()?;

        Ok(items)
    }
}

impl DestinationWriter for DieselRepository {
    fn create_destination(&self, destination: &NewDestination) -> RepositoryResult<Destination> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;

        let id = conn.transaction::<_, RepositoryError, _>(|conn| {
            let current_max = destinations::table
                .select(diesel::dsl::max(destinations::id))
                .first::<Option<i32>>(conn)?;

            let id = self
                .row_ids
                .allocate("destinations", current_max, |candidate| {
                    Ok(diesel::select(diesel::dsl::exists(
                        destinations::table.filter(destinations::id.eq(candidate)),
                    ))
                    .get_result::<bool>(conn)?)
                })?;

            let db_destination =
                DbNewDestination::from((DestinationId::new(id)?, destination.clone()));
            diesel::insert_into(destinations::table)
                .values(db_destination)
                .execute(conn)?;

            Ok(id)
        })?;

        Ok(Destination {
            id: DestinationId::new(id)?,
            name: destination.name.clone(),
            country: destination.country.clone(),
            city: destination.city.clone(),
            region: destination.region.clone(),
            description: destination.description.clone(),
            adult_price: destination.adult_price,
            minor_price: destination.minor_price,
            registered_at: destination.registered_at,
        })
    }

    fn add_destination_image(
        &self,
        destination_id: DestinationId,
        url: &ImageUrl,
    ) -> RepositoryResult<ImageId> {
        use crate::schema::destination_images;

        let mut conn = self.conn()?;

        let id = conn.transaction::<_, RepositoryError, _>(|conn| {
            let id = self
                .media_ids
                .allocate("destination_images", None, |candidate| {
                    Ok(diesel::select(diesel::dsl::exists(
                        destination_images::table.filter(destination_images::id.eq(candidate)),
                    ))
                    .get_result::<bool>(conn)?)
                })?;

            diesel::insert_into(destination_images::table)
                .values(DbNewDestinationImage {
                    id,
                    destination_id: destination_id.get(),
                    url: url.as_str().to_string(),
                })
                .execute(conn)?;

            Ok(id)
        })?;

        Ok(ImageId::new(id)?)
    }
}
