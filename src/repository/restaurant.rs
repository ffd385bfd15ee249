use crate::domain::restaurant::Restaurant;
use crate::models::restaurant::{RESTAURANT_COLUMNS, Restaurant as DbRestaurant};
use crate::repository::errors::RepositoryResult;
use crate::repository::{RestaurantListQuery, RestaurantReader, SupabaseRepository, read_json};

impl RestaurantReader for SupabaseRepository {
    async fn list_restaurants(
        &self,
        query: RestaurantListQuery,
    ) -> RepositoryResult<Vec<Restaurant>> {
        let mut params = vec![("select", RESTAURANT_COLUMNS.to_string())];
        if let Some(status) = &query.connection_status {
            params.push(("connection_status", format!("eq.{}", status.as_str())));
        }
        if query.newest_first {
            params.push(("order", "created_at.desc".to_string()));
        }

        let response = self
            .table_request("restaurants")?
            .query(&params)
            .send()
            .await?;
        let rows: Vec<DbRestaurant> = read_json(response).await?;

        let restaurants = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match Restaurant::try_from(row) {
                    Ok(restaurant) => Some(restaurant),
                    Err(err) => {
                        log::warn!("Skipping restaurant {id}: {err}");
                        None
                    }
                }
            })
            .collect();

        Ok(restaurants)
    }
}
