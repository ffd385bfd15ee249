//! Home page service: company settings plus the partner restaurant directory.

use crate::domain::company_settings::CompanySettings;
use crate::domain::restaurant::Restaurant;
use crate::dto::main::{IndexPageData, RestaurantCard};
use crate::repository::errors::RepositoryError;
use crate::repository::{CompanySettingsReader, RestaurantListQuery, RestaurantReader};

/// Keeps connected restaurants only, newest first.
///
/// The backend query already asks for this; the rows are re-checked so the
/// rendered directory never depends on it.
pub fn public_directory(mut restaurants: Vec<Restaurant>) -> Vec<Restaurant> {
    restaurants.retain(Restaurant::is_listed);
    restaurants.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    restaurants
}

/// Loads everything the home page renders.
///
/// The two reads are independent and run concurrently. Settings failures fall
/// back to the defaults; a restaurant failure marks the directory unavailable.
pub async fn load_index_page<R>(repo: &R) -> IndexPageData
where
    R: CompanySettingsReader + RestaurantReader,
{
    let (settings, restaurants) = futures::join!(
        repo.get_company_settings(),
        repo.list_restaurants(RestaurantListQuery::public_directory())
    );

    let company = match settings {
        Ok(settings) => settings,
        Err(RepositoryError::NotFound) => {
            log::warn!("Company settings row is missing, using defaults");
            CompanySettings::default()
        }
        Err(err) => {
            log::error!("Failed to load company settings: {err}");
            CompanySettings::default()
        }
    };

    let (restaurants, directory_unavailable) = match restaurants {
        Ok(restaurants) => (
            public_directory(restaurants)
                .iter()
                .map(RestaurantCard::from)
                .collect(),
            false,
        ),
        Err(err) => {
            log::error!("Failed to list restaurants: {err}");
            (Vec::new(), true)
        }
    };

    IndexPageData {
        company,
        restaurants,
        directory_unavailable,
    }
}
