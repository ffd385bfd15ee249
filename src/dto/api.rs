//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::dto::main::RestaurantCard;

/// Payload returned by `/api/v1/restaurants`.
#[derive(Debug, Serialize)]
pub struct RestaurantsResponse {
    pub total: usize,
    pub restaurants: Vec<RestaurantCard>,
}
