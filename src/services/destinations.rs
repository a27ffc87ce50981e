//! Destination materialization: find-or-create plus best-effort enrichment.

use chrono::Utc;

use crate::assistant::envelope::DestinationPayload;
use crate::domain::destination::NewDestination;
use crate::domain::facility::NewFacility;
use crate::domain::poi::NewPointOfInterest;
use crate::domain::types::{
    DescriptionText, DestinationId, DestinationName, FacilityName, ImageUrl, PlaceName, PoiKind,
    PoiName, Price,
};
use crate::photos::PhotoSearcher;
use crate::repository::{
    CategoryReader, DestinationReader, DestinationWriter, FacilityReader, FacilityWriter,
    LinkReader, LinkWriter, PoiWriter,
};
use crate::services::errors::ProcessError;
use crate::services::lookup;

/// Sentinel for place fields the model left out.
const UNKNOWN_PLACE: &str = "Unknown";
/// At most this many photo-search queries are run for a destination.
const MAX_IMAGE_QUERIES: usize = 3;
/// Photos fetched per destination query.
const PHOTOS_PER_QUERY: u32 = 2;
/// At most this many photo-search queries are run per point of interest.
const MAX_POI_QUERIES: usize = 2;

/// The enrichment step a non-fatal failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentStep {
    Images,
    Categories,
    Facilities,
    PointsOfInterest,
}

impl EnrichmentStep {
    /// Human-readable label used in user-facing warning notes.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Categories => "categories",
            Self::Facilities => "facilities",
            Self::PointsOfInterest => "points of interest",
        }
    }
}

/// A non-fatal enrichment failure, collected rather than propagated.
#[derive(Debug, Clone)]
pub struct EnrichmentFailure {
    pub step: EnrichmentStep,
    pub detail: String,
}

/// Result of a successful destination materialization.
///
/// Enrichment failures are returned to the caller, which decides whether
/// and how to surface them; they never flip the overall outcome to failure.
#[derive(Debug)]
pub struct MaterializedDestination {
    pub destination_id: DestinationId,
    pub message: String,
    pub already_exists: bool,
    pub enrichment_failures: Vec<EnrichmentFailure>,
}

/// Materialize a destination from an assistant payload.
///
/// Steps run in a fixed order: validate, find-or-create, then the four
/// enrichment steps (images, categories, facilities, points of interest).
/// When the case-insensitive (city, country) pair already exists the call
/// short-circuits to the existing row and performs no enrichment.
pub fn process_destination<R, P>(
    payload: &DestinationPayload,
    ai_message: Option<&str>,
    repo: &R,
    photos: &P,
) -> Result<MaterializedDestination, ProcessError>
where
    R: DestinationReader
        + DestinationWriter
        + CategoryReader
        + FacilityReader
        + FacilityWriter
        + LinkReader
        + LinkWriter
        + PoiWriter,
    P: PhotoSearcher + ?Sized,
{
    let name = lookup::non_blank(payload.name.as_deref());
    let city = lookup::non_blank(payload.city.as_deref());
    let country = lookup::non_blank(payload.country.as_deref());

    let mut missing = Vec::new();
    if name.is_none() {
        missing.push("name");
    }
    if city.is_none() {
        missing.push("city");
    }
    if country.is_none() {
        missing.push("country");
    }
    let (Some(name), Some(city), Some(country)) = (name, city, country) else {
        return Err(ProcessError::Validation { missing });
    };

    let existing = repo
        .list_destinations()
        .map_err(|source| ProcessError::Persistence {
            context: "the destination list".to_string(),
            source,
        })?;

    if let Some(found) = lookup::find_destination(&existing, city, country) {
        return Ok(MaterializedDestination {
            destination_id: found.id,
            message: format!("{} is already in the destination list.", found.name),
            already_exists: true,
            enrichment_failures: Vec::new(),
        });
    }

    let description = match lookup::non_blank(payload.description.as_deref()) {
        Some(supplied) => DescriptionText::new(supplied)?,
        None => DescriptionText::new(format!(
            "{name} is a travel destination in {city}, {country}."
        ))?,
    };
    let region = match lookup::non_blank(payload.region.as_deref()) {
        Some(region) => PlaceName::new(region)?,
        None => PlaceName::new(UNKNOWN_PLACE)?,
    };

    let new_destination = NewDestination {
        name: DestinationName::new(name)?,
        country: PlaceName::new(country)?,
        city: PlaceName::new(city)?,
        region,
        description,
        adult_price: Price::new(payload.adult_price.unwrap_or(0.0)),
        minor_price: Price::new(payload.minor_price.unwrap_or(0.0)),
        registered_at: Utc::now().naive_utc(),
    };

    let destination = repo.create_destination(&new_destination).map_err(|source| {
        log::error!("failed to create destination {name}: {source}");
        ProcessError::Persistence {
            context: format!("destination {name}"),
            source,
        }
    })?;

    let mut failures = Vec::new();
    enrich_images(payload, destination.id, city, country, repo, photos, &mut failures);
    enrich_categories(payload, destination.id, repo, &mut failures);
    enrich_facilities(payload, destination.id, repo, &mut failures);
    enrich_points_of_interest(payload, destination.id, repo, photos, &mut failures);

    let message = match ai_message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(message) => message.to_string(),
        None => {
            // The prompt contract requires a message; its absence is worth
            // flagging even though we can recover.
            log::warn!("assistant supplied no message for destination {name}; synthesizing one");
            format!("Added {name} to the destination list.")
        }
    };

    Ok(MaterializedDestination {
        destination_id: destination.id,
        message,
        already_exists: false,
        enrichment_failures: failures,
    })
}

fn enrich_images<R, P>(
    payload: &DestinationPayload,
    destination_id: DestinationId,
    city: &str,
    country: &str,
    repo: &R,
    photos: &P,
    failures: &mut Vec<EnrichmentFailure>,
) where
    R: DestinationWriter,
    P: PhotoSearcher + ?Sized,
{
    let mut queries: Vec<String> = payload
        .photo_search_queries
        .iter()
        .filter_map(|q| lookup::non_blank(Some(q.as_str())))
        .take(MAX_IMAGE_QUERIES)
        .map(str::to_string)
        .collect();
    if queries.is_empty() {
        queries = fallback_image_queries(city, country);
    }

    for query in &queries {
        let found = match photos.search_photos(query, PHOTOS_PER_QUERY, 1) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("photo search failed for `{query}`: {e}");
                failures.push(EnrichmentFailure {
                    step: EnrichmentStep::Images,
                    detail: e.to_string(),
                });
                continue;
            }
        };
        for photo in found.into_iter().take(PHOTOS_PER_QUERY as usize) {
            let Some(url) = photo.preferred_url() else {
                continue;
            };
            let url = match ImageUrl::new(url) {
                Ok(url) => url,
                Err(e) => {
                    log::debug!("skipping invalid photo url for `{query}`: {e}");
                    continue;
                }
            };
            if let Err(e) = repo.add_destination_image(destination_id, &url) {
                log::error!("failed to store image for destination {destination_id}: {e}");
                failures.push(EnrichmentFailure {
                    step: EnrichmentStep::Images,
                    detail: e.to_string(),
                });
            }
        }
    }
}

/// Queries synthesized when the model supplied none of its own.
fn fallback_image_queries(city: &str, country: &str) -> Vec<String> {
    vec![
        format!("{city} {country} travel"),
        format!("{city} landmarks"),
        format!("{country} tourism"),
    ]
}

fn enrich_categories<R>(
    payload: &DestinationPayload,
    destination_id: DestinationId,
    repo: &R,
    failures: &mut Vec<EnrichmentFailure>,
) where
    R: CategoryReader + LinkReader + LinkWriter,
{
    if payload.categories.is_empty() {
        return;
    }

    let snapshot = match repo.list_categories() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::error!("failed to load category snapshot: {e}");
            failures.push(EnrichmentFailure {
                step: EnrichmentStep::Categories,
                detail: e.to_string(),
            });
            return;
        }
    };
    let mut linked = match repo.list_category_links(destination_id) {
        Ok(linked) => linked,
        Err(e) => {
            log::error!("failed to load category links for {destination_id}: {e}");
            failures.push(EnrichmentFailure {
                step: EnrichmentStep::Categories,
                detail: e.to_string(),
            });
            return;
        }
    };

    for raw in &payload.categories {
        let Some(name) = lookup::non_blank(Some(raw.as_str())) else {
            continue;
        };
        // Categories are a closed vocabulary: unmatched names are skipped,
        // never created.
        let Some(category) = lookup::find_category(&snapshot, name) else {
            log::debug!("no category matches `{name}`; skipping");
            continue;
        };
        if linked.contains(&category.id) {
            continue;
        }
        match repo.link_category(destination_id, category.id) {
            Ok(_) => linked.push(category.id),
            Err(e) => {
                log::error!("failed to link category {} to {destination_id}: {e}", category.id);
                failures.push(EnrichmentFailure {
                    step: EnrichmentStep::Categories,
                    detail: e.to_string(),
                });
            }
        }
    }
}

fn enrich_facilities<R>(
    payload: &DestinationPayload,
    destination_id: DestinationId,
    repo: &R,
    failures: &mut Vec<EnrichmentFailure>,
) where
    R: FacilityReader + FacilityWriter + LinkReader + LinkWriter,
{
    if payload.facilities.is_empty() {
        return;
    }

    let mut snapshot = match repo.list_facilities() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::error!("failed to load facility snapshot: {e}");
            failures.push(EnrichmentFailure {
                step: EnrichmentStep::Facilities,
                detail: e.to_string(),
            });
            return;
        }
    };
    let mut linked = match repo.list_facility_links(destination_id) {
        Ok(linked) => linked,
        Err(e) => {
            log::error!("failed to load facility links for {destination_id}: {e}");
            failures.push(EnrichmentFailure {
                step: EnrichmentStep::Facilities,
                detail: e.to_string(),
            });
            return;
        }
    };

    for raw in &payload.facilities {
        let Some(name) = lookup::non_blank(Some(raw.as_str())) else {
            continue;
        };
        let facility_id = match lookup::find_facility(&snapshot, name) {
            Some(facility) => facility.id,
            None => {
                let Ok(facility_name) = FacilityName::new(name) else {
                    continue;
                };
                let new_facility = NewFacility {
                    name: facility_name,
                    description: DescriptionText::new(format!(
                        "{name} available at this destination."
                    ))
                    .ok(),
                };
                match repo.create_facility(&new_facility) {
                    Ok(facility) => {
                        let id = facility.id;
                        snapshot.push(facility);
                        id
                    }
                    Err(e) => {
                        log::error!("failed to create facility {name}: {e}");
                        failures.push(EnrichmentFailure {
                            step: EnrichmentStep::Facilities,
                            detail: e.to_string(),
                        });
                        continue;
                    }
                }
            }
        };
        if linked.contains(&facility_id) {
            continue;
        }
        match repo.link_facility(destination_id, facility_id) {
            Ok(_) => linked.push(facility_id),
            Err(e) => {
                log::error!("failed to link facility {facility_id} to {destination_id}: {e}");
                failures.push(EnrichmentFailure {
                    step: EnrichmentStep::Facilities,
                    detail: e.to_string(),
                });
            }
        }
    }
}

fn enrich_points_of_interest<R, P>(
    payload: &DestinationPayload,
    destination_id: DestinationId,
    repo: &R,
    photos: &P,
    failures: &mut Vec<EnrichmentFailure>,
) where
    R: PoiWriter,
    P: PhotoSearcher + ?Sized,
{
    for poi in &payload.points_of_interest {
        let Some(name) = lookup::non_blank(poi.name.as_deref()) else {
            log::debug!("skipping point of interest without a name");
            continue;
        };
        let Ok(poi_name) = PoiName::new(name) else {
            continue;
        };
        let new_poi = NewPointOfInterest {
            destination_id,
            name: poi_name,
            description: lookup::non_blank(poi.description.as_deref())
                .and_then(|d| DescriptionText::new(d).ok()),
            kind: lookup::non_blank(poi.kind.as_deref()).and_then(|k| PoiKind::new(k).ok()),
        };
        let created = match repo.create_point_of_interest(&new_poi) {
            Ok(created) => created,
            Err(e) => {
                log::error!("failed to create point of interest {name}: {e}");
                failures.push(EnrichmentFailure {
                    step: EnrichmentStep::PointsOfInterest,
                    detail: e.to_string(),
                });
                continue;
            }
        };

        for query in poi
            .photo_search_queries
            .iter()
            .filter_map(|q| lookup::non_blank(Some(q.as_str())))
            .take(MAX_POI_QUERIES)
        {
            match photos.search_photos(query, 1, 1) {
                Ok(found) => {
                    let Some(url) = found.first().and_then(|p| p.preferred_url()) else {
                        continue;
                    };
                    let Ok(url) = ImageUrl::new(url) else {
                        continue;
                    };
                    if let Err(e) = repo.add_poi_image(created.id, &url) {
                        log::error!("failed to store image for poi {}: {e}", created.id);
                        failures.push(EnrichmentFailure {
                            step: EnrichmentStep::PointsOfInterest,
                            detail: e.to_string(),
                        });
                    }
                }
                Err(e) => {
                    log::warn!("photo search failed for poi query `{query}`: {e}");
                    failures.push(EnrichmentFailure {
                        step: EnrichmentStep::PointsOfInterest,
                        detail: e.to_string(),
                    });
                }
            }
        }
    }
}
