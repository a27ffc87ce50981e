use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, DestinationId, FacilityId};
use crate::models::category::Category as DbCategory;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, DieselRepository, LinkReader, LinkWriter};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }
}

impl LinkReader for DieselRepository {
    fn list_category_links(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<CategoryId>> {
        use crate::schema::destination_categories;

        let mut conn = self.conn()?;

        let ids = destination_categories::table
            .filter(destination_categories::destination_id.eq(destination_id.get()))
            .select(destination_categories::category_id)
            .load::<i32>(&mut conn)?
            .into_iter()
            .map(CategoryId::new)
            .collect::<Result<Vec<CategoryId>, _>>()?;

        Ok(ids)
    }

    fn list_facility_links(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<FacilityId>> {
        use crate::schema::destination_facilities;

        let mut conn = self.conn()?;

        let ids = destination_facilities::table
            .filter(destination_facilities::destination_id.eq(destination_id.get()))
            .select(destination_facilities::facility_id)
            .load::<i32>(&mut conn)?
            .into_iter()
            .map(FacilityId::new)
            .collect::<Result<Vec<FacilityId>, _>>()?;

        Ok(ids)
    }
}

impl LinkWriter for DieselRepository {
    fn link_category(
        &self,
        destination_id: DestinationId,
        category_id: CategoryId,
    ) -> RepositoryResult<usize> {
        use crate::schema::destination_categories;

        let mut conn = self.conn()?;

        let affected = diesel::insert_into(destination_categories::table)
            .values((
                destination_categories::destination_id.eq(destination_id.get()),
                destination_categories::category_id.eq(category_id.get()),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn link_facility(
        &self,
        destination_id: DestinationId,
        facility_id: FacilityId,
    ) -> RepositoryResult<usize> {
        use crate::schema::destination_facilities;

        let mut conn = self.conn()?;

        let affected = diesel::insert_into(destination_facilities::table)
            .values((
                destination_facilities::destination_id.eq(destination_id.get()),
                destination_facilities::facility_id.eq(facility_id.get()),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
