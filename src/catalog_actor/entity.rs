use crate::actor_framework::Entity;
use crate::domain::{Restaurant, RestaurantCreate};

impl Entity for Restaurant {
    type Id = String;
    type CreateParams = RestaurantCreate;
    type Action = ();
    type ActionResult = ();

    const KIND: &'static str = "restaurant";

    /// Loads a restaurant into the catalog under the generated id.
    ///
    /// # Errors
    /// Rejects menus with a negative price or a repeated item id.
    fn from_create_params(id: String, params: RestaurantCreate) -> Result<Self, String> {
        if let Some(item) = params.menu.iter().find(|item| item.price < 0.0) {
            return Err(format!("Menu item {} has a negative price", item.id));
        }
        for (idx, item) in params.menu.iter().enumerate() {
            if params.menu[..idx].iter().any(|earlier| earlier.id == item.id) {
                return Err(format!("Menu item {} appears twice", item.id));
            }
        }

        Ok(Self {
            id,
            name: params.name,
            image_url: params.image_url,
            logo_url: params.logo_url,
            cuisines: params.cuisines,
            rating: params.rating,
            reviews_count: params.reviews_count,
            delivery_time: params.delivery_time,
            address: params.address,
            phone: params.phone,
            opening_hours: params.opening_hours,
            description: params.description,
            menu: params.menu,
            reviews: params.reviews,
        })
    }

    /// The catalog is read-only; no actions are defined.
    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
