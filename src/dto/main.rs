use serde::Serialize;

use crate::domain::company_settings::CompanySettings;
use crate::domain::restaurant::Restaurant;

/// Directory entry as rendered on the home page and returned by the API.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RestaurantCard {
    pub id: String,
    pub name: String,
    /// `city, country`
    pub location: String,
    pub owner_full_name: String,
    pub since_year: i32,
    pub menu_slug: String,
    pub menu_path: String,
}

impl From<&Restaurant> for RestaurantCard {
    fn from(restaurant: &Restaurant) -> Self {
        let slug = restaurant.menu_slug();
        Self {
            id: restaurant.id.to_string(),
            name: restaurant.name.to_string(),
            location: format!("{}, {}", restaurant.city, restaurant.country),
            owner_full_name: restaurant.owner_full_name.clone(),
            since_year: restaurant.since_year(),
            menu_path: slug.menu_path(),
            menu_slug: slug.as_str().to_string(),
        }
    }
}

/// Data required to render the home page template.
#[derive(Debug)]
pub struct IndexPageData {
    /// Company settings, or the defaults when they could not be read.
    pub company: CompanySettings,
    /// Connected restaurants, newest first.
    pub restaurants: Vec<RestaurantCard>,
    /// Set when the restaurant read failed, as opposed to returning no rows.
    pub directory_unavailable: bool,
}
