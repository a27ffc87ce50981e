//! Case-insensitive name matching against pre-fetched snapshots.
//!
//! These helpers back the find-or-create flows: all comparisons trim and
//! lower-case both sides, and all existence checks run over collections
//! fetched once per call rather than re-querying inside loops. Field-length
//! clamping lives with the domain newtypes in [`crate::domain::types`].

use crate::domain::category::Category;
use crate::domain::destination::Destination;
use crate::domain::facility::Facility;

/// Case-insensitive, trimmed string equality.
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// `Some(trimmed)` when the value is present and non-blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Find a destination by its case-insensitive (city, country) dedup key.
pub fn find_destination<'a>(
    destinations: &'a [Destination],
    city: &str,
    country: &str,
) -> Option<&'a Destination> {
    destinations
        .iter()
        .find(|d| names_match(&d.city, city) && names_match(&d.country, country))
}

/// Find a category by case-insensitive name.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| names_match(&c.name, name))
}

/// Find a facility by case-insensitive name.
pub fn find_facility<'a>(facilities: &'a [Facility], name: &str) -> Option<&'a Facility> {
    facilities.iter().find(|f| names_match(&f.name, name))
}
