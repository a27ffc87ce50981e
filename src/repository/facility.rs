use diesel::prelude::*;

use crate::domain::facility::{Facility, NewFacility};
use crate::domain::types::FacilityId;
use crate::models::facility::{Facility as DbFacility, NewFacility as DbNewFacility};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, FacilityReader, FacilityWriter};

impl FacilityReader for DieselRepository {
    fn list_facilities(&self) -> RepositoryResult<Vec<Facility>> {
        use crate::schema::facilities;

        let mut conn = self.conn()?;

        let items = facilities::table
            .order(facilities::name.asc())
            .load::<DbFacility>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Facility>, _>>()?;

        Ok(items)
    }
}

impl FacilityWriter for DieselRepository {
    fn create_facility(&self, facility: &NewFacility) -> RepositoryResult<Facility> {
        use crate::schema::facilities;

        let mut conn = self.conn()?;

        let id = conn.transaction::<_, RepositoryError, _>(|conn| {
            let current_max = facilities::table
                .select(diesel::dsl::max(facilities::id))
                .first::<Option<i32>>(conn)?;

            let id = self
                .row_ids
                .allocate("facilities", current_max, |candidate| {
                    Ok(diesel::select(diesel::dsl::exists(
                        facilities::table.filter(facilities::id.eq(candidate)),
                    ))
                    .get_result::<bool>(conn)?)
                })?;

            let db_facility = DbNewFacility::from((FacilityId::new(id)?, facility.clone()));
            diesel::insert_into(facilities::table)
                .values(db_facility)
                .execute(conn)?;

            Ok(id)
        })?;

        Ok(Facility {
            id: FacilityId::new(id)?,
            name: facility.name.clone(),
            description: facility.description.clone(),
        })
    }
}
