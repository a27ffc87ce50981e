use std::cell::{Cell, RefCell};

use crate::domain::category::Category;
use crate::domain::destination::{Destination, DestinationImage, NewDestination};
use crate::domain::facility::{Facility, NewFacility};
use crate::domain::poi::{NewPointOfInterest, PoiImage, PointOfInterest};
use crate::domain::suggestion::{NewSuggestion, Suggestion};
use crate::domain::types::{
    CategoryId, DestinationId, FacilityId, ImageId, ImageUrl, PoiId, SuggestionId,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CategoryReader, DestinationReader, DestinationWriter, FacilityReader, FacilityWriter,
    LinkReader, LinkWriter, PoiReader, PoiWriter, SuggestionReader, SuggestionWriter,
};

/// Simple in-memory repository used for unit tests.
///
/// Writers allocate `max + 1` ids; the whole store lives behind `RefCell`
/// because the repository traits take `&self`.
#[derive(Default)]
pub struct TestRepository {
    destinations: RefCell<Vec<Destination>>,
    destination_images: RefCell<Vec<DestinationImage>>,
    categories: RefCell<Vec<Category>>,
    facilities: RefCell<Vec<Facility>>,
    category_links: RefCell<Vec<(DestinationId, CategoryId)>>,
    facility_links: RefCell<Vec<(DestinationId, FacilityId)>>,
    pois: RefCell<Vec<PointOfInterest>>,
    poi_images: RefCell<Vec<PoiImage>>,
    suggestions: RefCell<Vec<Suggestion>>,
    fail_destination_inserts: Cell<bool>,
    fail_suggestion_inserts: Cell<bool>,
    next_image_id: Cell<i32>,
}

impl TestRepository {
    pub fn new() -> Self {
        Self {
            next_image_id: Cell::new(1),
            ..Self::default()
        }
    }

    pub fn with_destinations(self, destinations: Vec<Destination>) -> Self {
        *self.destinations.borrow_mut() = destinations;
        self
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.categories.borrow_mut() = categories;
        self
    }

    pub fn with_facilities(self, facilities: Vec<Facility>) -> Self {
        *self.facilities.borrow_mut() = facilities;
        self
    }

    pub fn with_suggestions(self, suggestions: Vec<Suggestion>) -> Self {
        *self.suggestions.borrow_mut() = suggestions;
        self
    }

    /// Make every destination insert fail, for persistence-error tests.
    pub fn failing_destination_inserts(self) -> Self {
        self.fail_destination_inserts.set(true);
        self
    }

    /// Make every suggestion insert fail, for persistence-error tests.
    pub fn failing_suggestion_inserts(self) -> Self {
        self.fail_suggestion_inserts.set(true);
        self
    }

    pub fn destinations(&self) -> Vec<Destination> {
        self.destinations.borrow().clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.borrow().clone()
    }

    pub fn facilities(&self) -> Vec<Facility> {
        self.facilities.borrow().clone()
    }

    pub fn category_links(&self) -> Vec<(DestinationId, CategoryId)> {
        self.category_links.borrow().clone()
    }

    pub fn facility_links(&self) -> Vec<(DestinationId, FacilityId)> {
        self.facility_links.borrow().clone()
    }

    pub fn destination_images(&self) -> Vec<DestinationImage> {
        self.destination_images.borrow().clone()
    }

    pub fn pois(&self) -> Vec<PointOfInterest> {
        self.pois.borrow().clone()
    }

    pub fn poi_images(&self) -> Vec<PoiImage> {
        self.poi_images.borrow().clone()
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.suggestions.borrow().clone()
    }

    fn next_image_id(&self) -> i32 {
        let id = self.next_image_id.get();
        self.next_image_id.set(id + 1);
        id
    }

    fn injected_failure() -> RepositoryError {
        RepositoryError::Database(diesel::result::Error::BrokenTransactionManager)
    }
}

impl DestinationReader for TestRepository {
    fn list_destinations(&self) -> RepositoryResult<Vec<Destination>> {
        Ok(self.destinations.borrow().clone())
    }

    fn get_destination_by_id(&self, id: DestinationId) -> RepositoryResult<Option<Destination>> {
        Ok(self
            .destinations
            .borrow()
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    fn list_destination_images(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<DestinationImage>> {
        Ok(self
            .destination_images
            .borrow()
            .iter()
            .filter(|i| i.destination_id == destination_id)
            .cloned()
            .collect())
    }
}

impl DestinationWriter for TestRepository {
    fn create_destination(&self, destination: &NewDestination) -> RepositoryResult<Destination> {
        if self.fail_destination_inserts.get() {
            return Err(Self::injected_failure());
        }
        let mut destinations = self.destinations.borrow_mut();
        let next = destinations.iter().map(|d| d.id.get()).max().unwrap_or(0) + 1;
        let created = Destination {
            id: DestinationId::new(next)?,
            name: destination.name.clone(),
            country: destination.country.clone(),
            city: destination.city.clone(),
            region: destination.region.clone(),
            description: destination.description.clone(),
            adult_price: destination.adult_price,
            minor_price: destination.minor_price,
            registered_at: destination.registered_at,
        };
        destinations.push(created.clone());
        Ok(created)
    }

    fn add_destination_image(
        &self,
        destination_id: DestinationId,
        url: &ImageUrl,
    ) -> RepositoryResult<ImageId> {
        let id = ImageId::new(self.next_image_id())?;
        self.destination_images.borrow_mut().push(DestinationImage {
            id,
            destination_id,
            url: url.clone(),
        });
        Ok(id)
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }
}

impl FacilityReader for TestRepository {
    fn list_facilities(&self) -> RepositoryResult<Vec<Facility>> {
        Ok(self.facilities.borrow().clone())
    }
}

impl FacilityWriter for TestRepository {
    fn create_facility(&self, facility: &NewFacility) -> RepositoryResult<Facility> {
        let mut facilities = self.facilities.borrow_mut();
        let next = facilities.iter().map(|f| f.id.get()).max().unwrap_or(0) + 1;
        let created = Facility {
            id: FacilityId::new(next)?,
            name: facility.name.clone(),
            description: facility.description.clone(),
        };
        facilities.push(created.clone());
        Ok(created)
    }
}

impl LinkReader for TestRepository {
    fn list_category_links(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<CategoryId>> {
        Ok(self
            .category_links
            .borrow()
            .iter()
            .filter(|(d, _)| *d == destination_id)
            .map(|(_, c)| *c)
            .collect())
    }

    fn list_facility_links(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<FacilityId>> {
        Ok(self
            .facility_links
            .borrow()
            .iter()
            .filter(|(d, _)| *d == destination_id)
            .map(|(_, f)| *f)
            .collect())
    }
}

impl LinkWriter for TestRepository {
    fn link_category(
        &self,
        destination_id: DestinationId,
        category_id: CategoryId,
    ) -> RepositoryResult<usize> {
        self.category_links
            .borrow_mut()
            .push((destination_id, category_id));
        Ok(1)
    }

    fn link_facility(
        &self,
        destination_id: DestinationId,
        facility_id: FacilityId,
    ) -> RepositoryResult<usize> {
        self.facility_links
            .borrow_mut()
            .push((destination_id, facility_id));
        Ok(1)
    }
}

impl PoiReader for TestRepository {
    fn list_points_of_interest(
        &self,
        destination_id: DestinationId,
    ) -> RepositoryResult<Vec<PointOfInterest>> {
        Ok(self
            .pois
            .borrow()
            .iter()
            .filter(|p| p.destination_id == destination_id)
            .cloned()
            .collect())
    }

    fn list_poi_images(&self, poi_id: PoiId) -> RepositoryResult<Vec<PoiImage>> {
        Ok(self
            .poi_images
            .borrow()
            .iter()
            .filter(|i| i.poi_id == poi_id)
            .cloned()
            .collect())
    }
}

impl PoiWriter for TestRepository {
    fn create_point_of_interest(
        &self,
        poi: &NewPointOfInterest,
    ) -> RepositoryResult<PointOfInterest> {
        let mut pois = self.pois.borrow_mut();
        let next = pois.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1;
        let created = PointOfInterest {
            id: PoiId::new(next)?,
            destination_id: poi.destination_id,
            name: poi.name.clone(),
            description: poi.description.clone(),
            kind: poi.kind.clone(),
        };
        pois.push(created.clone());
        Ok(created)
    }

    fn add_poi_image(&self, poi_id: PoiId, url: &ImageUrl) -> RepositoryResult<ImageId> {
        let id = ImageId::new(self.next_image_id())?;
        self.poi_images.borrow_mut().push(PoiImage {
            id,
            poi_id,
            url: url.clone(),
        });
        Ok(id)
    }
}

impl SuggestionReader for TestRepository {
    fn get_suggestion_by_id(&self, id: SuggestionId) -> RepositoryResult<Option<Suggestion>> {
        Ok(self
            .suggestions
            .borrow()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }
}

impl SuggestionWriter for TestRepository {
    fn create_suggestion(&self, suggestion: &NewSuggestion) -> RepositoryResult<Suggestion> {
        if self.fail_suggestion_inserts.get() {
            return Err(Self::injected_failure());
        }
        let mut suggestions = self.suggestions.borrow_mut();
        let next = suggestions.iter().map(|s| s.id.get()).max().unwrap_or(0) + 1;
        let created = Suggestion {
            id: SuggestionId::new(next)?,
            user_id: suggestion.user_id,
            destination_id: suggestion.destination_id,
            title: suggestion.title.clone(),
            description: suggestion.description.clone(),
            estimated_budget: suggestion.estimated_budget,
            ai_generated: suggestion.ai_generated,
            is_public: suggestion.is_public,
            share_code: None,
            created_at: suggestion.created_at,
        };
        suggestions.push(created.clone());
        Ok(created)
    }

    fn set_suggestion_visibility(
        &self,
        id: SuggestionId,
        is_public: bool,
        share_code: Option<&str>,
    ) -> RepositoryResult<usize> {
        let mut suggestions = self.suggestions.borrow_mut();
        match suggestions.iter_mut().find(|s| s.id == id) {
            Some(suggestion) => {
                suggestion.is_public = is_public;
                if let Some(code) = share_code {
                    suggestion.share_code = Some(code.to_string());
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
