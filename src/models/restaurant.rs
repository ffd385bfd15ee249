use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::restaurant::{ConnectionStatus, Restaurant as DomainRestaurant};
use crate::domain::types::{RestaurantId, RestaurantName, TypeConstraintError};

/// Columns projected from the `restaurants` table.
pub const RESTAURANT_COLUMNS: &str =
    "id,name,owner_full_name,city,country,connection_status,created_at";

#[derive(Debug, Clone, Deserialize)]
/// PostgREST row for [`crate::domain::restaurant::Restaurant`].
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub owner_full_name: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub connection_status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<Restaurant> for DomainRestaurant {
    type Error = TypeConstraintError;

    fn try_from(row: Restaurant) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RestaurantId::from_uuid(row.id),
            name: RestaurantName::new(row.name)?,
            owner_full_name: row.owner_full_name.unwrap_or_default(),
            owner_email: row.owner_email.filter(|s| !s.trim().is_empty()),
            city: row.city.unwrap_or_default(),
            country: row.country.unwrap_or_default(),
            connection_status: row.connection_status,
            created_at: row.created_at,
        })
    }
}
