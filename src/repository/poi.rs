use diesel::prelude::*;

use crate::domain::poi::{NewPointOfInterest, PoiImage, PointOfInterest};
use crate::domain::types::{DestinationId, ImageId, ImageUrl, PoiId};
use crate::models::poi::{
    NewPoiImage as DbNewPoiImage, NewPointOfInterest as DbNewPointOfInterest,
    PoiImage as DbPoiImage, PointOfInterest as DbPointOfInterest,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PoiReader, PoiWriter};

impl PoiReader for DieselRepository {
    fn list_points_of_interest(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<PointOfInterest>> {
        use crate::schema::points_of_interest;

        let mut conn = self.conn()?;

        let items = points_of_interest::table
            .filter(points_of_interest::destination_id.eq(destination_id.get()))
            .order(points_of_interest::id.asc())
            .load::<DbPointOfInterest>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<PointOfInterest>, _>>()?;

        Ok(items)
    }

    fn list_poi_images(&self, poi_id: PoiId) -> RepositoryResult<Vec<PoiImage>> {
        use crate::schema::poi_images;

        let mut conn = self.conn()?;

        let items = poi_images::table
            .filter(poi_images::poi_id.eq(poi_id.get()))
            .order(poi_images::id.asc())
            .load::<DbPoiImage>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<PoiImage>, _>>()?;

        Ok(items)
    }
}

impl PoiWriter for DieselRepository {
    fn create_point_of_interest(
        &self,
        poi: &NewPointOfInterest,
    ) -> RepositoryResult<PointOfInterest> {
        use crate::schema::points_of_interest;

        let mut conn = self.conn()?;

        let id = conn.transaction::<_, RepositoryError, _>(|conn| {
            let id = self
                .media_ids
                .allocate("points_of_interest", None, |candidate| {
                    Ok(diesel::select(diesel::dsl::exists(
                        points_of_interest::table.filter(points_of_interest::id.eq(candidate)),
                    ))
                    .get_result::<bool>(conn)?)
                })?;

            let db_poi = DbNewPointOfInterest::from((PoiId::new(id)?, poi.clone()));
            diesel::insert_into(points_of_interest::table)
                .values(db_poi)
                .execute(conn)?;

            Ok(id)
        })?;

        Ok(PointOfInterest {
            id: PoiId::new(id)?,
            destination_id: poi.destination_id,
            name: poi.name.clone(),
            description: poi.description.clone(),
            kind: poi.kind.clone(),
        })
    }

    fn add_poi_image(&self, poi_id: PoiId, url: &ImageUrl) -> RepositoryResult<ImageId> {
        use crate::schema::poi_images;

        let mut conn = self.conn()?;

        let id = conn.transaction::<_, RepositoryError, _>(|conn| {
            let id = self.media_ids.allocate("poi_images", None, |candidate| {
                Ok(diesel::select(diesel::dsl::exists(
                    poi_images::table.filter(poi_images::id.eq(candidate)),
                ))
                .get_result::<bool>(conn)?)
            })?;

            diesel::insert_into(poi_images::table)
                .values(DbNewPoiImage {
                    id,
                    poi_id: poi_id.get(),
                    url: url.as_str().to_string(),
                })
                .execute(conn)?;

            Ok(id)
        })?;

        Ok(ImageId::new(id)?)
    }
}
