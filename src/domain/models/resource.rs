use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bookable venue or unit owned by exactly one business.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub business_id: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ResourceSummary {
    pub id: String,
    pub name: String,
}

impl From<&Resource> for ResourceSummary {
    fn from(resource: &Resource) -> Self {
        Self {
            id: resource.id.clone(),
            name: resource.name.clone(),
        }
    }
}
