use std::sync::Arc;

use tracing::{debug, info, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::CatalogClient;
use crate::domain::{check_promo_code, Cart, CartChange, CartCreate, CartLine, MenuItem, PromoOutcome};
use crate::notification::{Notification, Notifier};

/// Client for cart state. Notifies the user about cart edits and promo codes.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    catalog_client: CatalogClient,
    notifier: Arc<dyn Notifier>,
    promo_code: String,
}

crate::impl_client_get!(CartClient, Cart, CartError, cart);

fn cart_error(cart_id: &str, error: FrameworkError) -> CartError {
    match error {
        FrameworkError::NotFound { .. } => CartError::NotFound(cart_id.to_string()),
        FrameworkError::Rejected(reason) => CartError::InvalidLine(reason),
        other => CartError::ActorCommunicationError(other.to_string()),
    }
}

impl CartClient {
    pub fn new(
        inner: ResourceClient<Cart>,
        catalog_client: CatalogClient,
        notifier: Arc<dyn Notifier>,
        promo_code: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            catalog_client,
            notifier,
            promo_code: promo_code.into(),
        }
    }

    /// Opens a cart for a checkout session, empty or pre-seeded.
    #[instrument(skip(self, lines), fields(line_count = lines.len()))]
    pub async fn open_cart(&self, lines: Vec<CartLine>) -> Result<String, CartError> {
        debug!("Sending request");
        self.inner.create(CartCreate { lines }).await.map_err(|e| cart_error("new", e))
    }

    async fn apply(&self, cart_id: String, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(cart_id.clone(), action)
            .await
            .map_err(|e| cart_error(&cart_id, e))
    }

    /// Adds a dish from a restaurant menu, or bumps its quantity.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, cart_id: String, restaurant_id: String, item_id: String) -> Result<Cart, CartError> {
        let item = self
            .catalog_client
            .find_menu_item(restaurant_id, &item_id)
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?
            .ok_or(CartError::UnknownMenuItem(item_id))?;
        self.add_item(cart_id, item).await
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn add_item(&self, cart_id: String, item: MenuItem) -> Result<Cart, CartError> {
        debug!("Sending request");
        let name = item.name.clone();
        let result = self.apply(cart_id, CartAction::AddOrIncrement(item)).await?;
        info!(change = ?result.change, "Item added");
        self.notifier.notify(Notification::info(
            "Item Added to Cart!",
            format!("{} has been successfully added to your cart.", name),
        ));
        Ok(result.cart)
    }

    /// Sets a line's quantity. Zero removes the line.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, cart_id: String, line_id: String, quantity: u32) -> Result<Cart, CartError> {
        debug!("Sending request");
        let result = self.apply(cart_id, CartAction::SetQuantity { line_id, quantity }).await?;
        self.notify_if_removed(result.change);
        Ok(result.cart)
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, cart_id: String, line_id: String) -> Result<Cart, CartError> {
        debug!("Sending request");
        let result = self.apply(cart_id, CartAction::Remove(line_id)).await?;
        self.notify_if_removed(result.change);
        Ok(result.cart)
    }

    fn notify_if_removed(&self, change: CartChange) {
        if change == CartChange::Removed {
            self.notifier.notify(Notification::info("Item Removed", "The item has been removed from your cart."));
        }
    }

    /// Removes the cart and returns its final contents. Only one caller can take a cart.
    #[instrument(skip(self))]
    pub async fn take_cart(&self, cart_id: String) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner.delete(cart_id.clone()).await.map_err(|e| cart_error(&cart_id, e))
    }

    /// Checks a promo code and notifies the result. Totals are not changed.
    #[instrument(skip(self))]
    pub fn apply_promo_code(&self, code: &str) -> PromoOutcome {
        let outcome = check_promo_code(code, &self.promo_code);
        let notification = match outcome {
            PromoOutcome::Accepted => Notification::info("Promo Applied!", "Your promo code was accepted."),
            PromoOutcome::Rejected => {
                Notification::destructive("Invalid Promo Code", "The promo code entered is not valid.")
            }
        };
        self.notifier.notify(notification);
        outcome
    }
}
