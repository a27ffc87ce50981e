use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::destination::{Destination, DestinationImage, NewDestination};
use crate::domain::facility::{Facility, NewFacility};
use crate::domain::poi::{NewPointOfInterest, PoiImage, PointOfInterest};
use crate::domain::suggestion::{NewSuggestion, Suggestion};
use crate::domain::types::{
    CategoryId, DestinationId, FacilityId, ImageId, ImageUrl, PoiId, SuggestionId,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::ids::IdAllocator;

pub mod category;
pub mod destination;
pub mod errors;
pub mod facility;
pub mod ids;
pub mod poi;
pub mod suggestion;
#[cfg(test)]
pub mod test;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely. Each call checks out its own connection; no
/// transaction spans more than one repository call.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
    /// Allocator for ordinary rows (destinations, facilities, suggestions).
    row_ids: IdAllocator,
    /// Allocator for media rows (images, points of interest).
    media_ids: IdAllocator,
}

impl DieselRepository {
    /// Create a new repository from an established database pool with the
    /// default allocation strategies.
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            row_ids: IdAllocator::max_plus_one(),
            media_ids: IdAllocator::time_based(IdAllocator::DEFAULT_MAX_ATTEMPTS),
        }
    }

    /// Override the id-allocation strategies.
    pub fn with_allocators(mut self, row_ids: IdAllocator, media_ids: IdAllocator) -> Self {
        self.row_ids = row_ids;
        self.media_ids = media_ids;
        self
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for destination entities.
pub trait DestinationReader {
    /// List all destinations.
    fn list_destinations(&self) -> RepositoryResult<Vec<Destination>>;
    /// Retrieve a destination by its identifier.
    fn get_destination_by_id(&self, id: DestinationId) -> RepositoryResult<Option<Destination>>;
    /// List image records attached to a destination.
    fn list_destination_images(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<DestinationImage>>;
}

/// Write operations for destination entities.
pub trait DestinationWriter {
    /// Persist a new destination, returning it with its allocated id.
    fn create_destination(&self, destination: &NewDestination) -> RepositoryResult<Destination>;
    /// Attach an image URL to a destination, returning the image id.
    fn add_destination_image(
        &self,
        destination_id: DestinationId,
        url: &ImageUrl,
    ) -> RepositoryResult<ImageId>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List the full category vocabulary.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Read-only operations for facility entities.
pub trait FacilityReader {
    /// List all facilities.
    fn list_facilities(&self) -> RepositoryResult<Vec<Facility>>;
}

/// Write operations for facility entities.
pub trait FacilityWriter {
    /// Persist a new facility, returning it with its allocated id.
    fn create_facility(&self, facility: &NewFacility) -> RepositoryResult<Facility>;
}

/// Read-only operations for the destination link tables.
pub trait LinkReader {
    /// Category ids already linked to a destination.
    fn list_category_links(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<CategoryId>>;
    /// Facility ids already linked to a destination.
    fn list_facility_links(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<FacilityId>>;
}

/// Write operations for the destination link tables.
///
/// Callers are expected to consult [`LinkReader`] first; inserting a pair
/// twice violates the composite primary key.
pub trait LinkWriter {
    /// Link a category to a destination.
    fn link_category(
        &self,
        destination_id: DestinationId,
        category_id: CategoryId,
    ) -> RepositoryResult<usize>;
    /// Link a facility to a destination.
    fn link_facility(
        &self,
        destination_id: DestinationId,
        facility_id: FacilityId,
    ) -> RepositoryResult<usize>;
}

/// Read-only operations for points of interest.
pub trait PoiReader {
    /// List points of interest owned by a destination.
    fn list_points_of_interest(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<PointOfInterest>>;
    /// List image records attached to a point of interest.
    fn list_poi_images(&self, poi_id: PoiId) -> RepositoryResult<Vec<PoiImage>>;
}

/// Write operations for points of interest.
pub trait PoiWriter {
    /// Persist a new point of interest, returning it with its allocated id.
    fn create_point_of_interest(
        &self,
        poi: &NewPointOfInterest,
    ) -> RepositoryResult<PointOfInterest>;
    /// Attach an image URL to a point of interest, returning the image id.
    fn add_poi_image(&self, poi_id: PoiId, url: &ImageUrl) -> RepositoryResult<ImageId>;
}

/// Read-only operations for suggestions.
pub trait SuggestionReader {
    /// Retrieve a suggestion by its identifier.
    fn get_suggestion_by_id(&self, id: SuggestionId) -> RepositoryResult<Option<Suggestion>>;
}

/// Write operations for suggestions.
pub trait SuggestionWriter {
    /// Persist a new suggestion, returning it with its allocated id.
    fn create_suggestion(&self, suggestion: &NewSuggestion) -> RepositoryResult<Suggestion>;
    /// Flip the public flag, optionally setting the share code.
    fn set_suggestion_visibility(
        &self,
        id: SuggestionId,
        is_public: bool,
        share_code: Option<&str>,
    ) -> RepositoryResult<usize>;
}
