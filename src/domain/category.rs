use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, DescriptionText};

/// Canonical destination category.
///
/// Categories are a closed, admin-curated vocabulary: the materialization
/// core attaches existing categories to destinations but never creates new
/// ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: Option<DescriptionText>,
}
