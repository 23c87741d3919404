use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::catalog_actor::CatalogError;
use crate::domain::{CuisineFilter, MenuItem, Restaurant, RestaurantCreate};

/// Client for the read-only restaurant catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Restaurant>,
}

crate::impl_basic_client!(CatalogClient, Restaurant, CatalogError, restaurant);

impl CatalogClient {
    #[instrument(skip(self, restaurant), fields(name = %restaurant.name))]
    pub async fn load_restaurant(&self, restaurant: RestaurantCreate) -> Result<String, CatalogError> {
        debug!("Sending request");
        self.inner.create(restaurant).await.map_err(|e| match e {
            FrameworkError::Rejected(reason) => CatalogError::LoadRejected(reason),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        })
    }

    /// Home page listing: name search plus the single-selection cuisine filter.
    #[instrument(skip(self, filter), fields(filter = %filter))]
    pub async fn search(&self, term: &str, filter: &CuisineFilter) -> Result<Vec<Restaurant>, CatalogError> {
        let restaurants = self.list_restaurants().await?;
        let matches: Vec<Restaurant> = restaurants.into_iter().filter(|r| r.matches(term, filter)).collect();
        debug!(count = matches.len(), "Search complete");
        Ok(matches)
    }

    /// Looks up a dish. An unknown restaurant or dish yields `None`.
    #[instrument(skip(self))]
    pub async fn find_menu_item(&self, restaurant_id: String, item_id: &str) -> Result<Option<MenuItem>, CatalogError> {
        let restaurant = self.get_restaurant(restaurant_id).await?;
        Ok(restaurant.and_then(|r| r.menu_item(item_id).cloned()))
    }
}
