use crate::dto::api::RestaurantsResponse;
use crate::dto::main::RestaurantCard;
use crate::repository::{RestaurantListQuery, RestaurantReader};
use crate::services::ServiceResult;
use crate::services::main::public_directory;

/// Returns the public restaurant directory for the JSON API.
///
/// Unlike the home page, a failed backend read is reported to the caller.
pub async fn list_public_restaurants<R>(repo: &R) -> ServiceResult<RestaurantsResponse>
where
    R: RestaurantReader,
{
    let restaurants = repo
        .list_restaurants(RestaurantListQuery::public_directory())
        .await
        .map_err(|err| {
            log::error!("Failed to list restaurants: {err}");
            err
        })?;

    let restaurants: Vec<RestaurantCard> = public_directory(restaurants)
        .iter()
        .map(RestaurantCard::from)
        .collect();

    Ok(RestaurantsResponse {
        total: restaurants.len(),
        restaurants,
    })
}
