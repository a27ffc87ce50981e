use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryName, DescriptionText, TypeConstraintError};

/// Diesel model representing the `categories` table.
///
/// There is no insertable counterpart: the vocabulary is admin-curated and
/// the core never creates category rows.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: CategoryName::new(category.name)?,
            description: category
                .description
                .filter(|d| !d.trim().is_empty())
                .map(DescriptionText::new)
                .transpose()?,
        })
    }
}
