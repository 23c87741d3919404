use tracing::{debug, error, info, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::domain::{
    price, round_cents, DeliveryDetails, Order, OrderCreate, OrderItem, OrderStatus, PricingRates, ValidatedCheckout,
};
use crate::order_actor::{OrderAction, OrderError, StatusChanged};

/// Client for the order history store.
///
/// Placing an order orchestrates the cart store: the cart is checked, taken,
/// priced and recorded as an order.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    cart_client: CartClient,
    rates: PricingRates,
}

crate::impl_client_get!(OrderClient, Order, OrderError, order);
crate::impl_client_list!(OrderClient, Order, OrderError, order);

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, cart_client: CartClient, rates: PricingRates) -> Self {
        Self { inner, cart_client, rates }
    }

    /// Records an order as-is. Used to load order history.
    #[instrument(skip(self, order), fields(status = %order.status))]
    pub async fn record_order(&self, order: OrderCreate) -> Result<String, OrderError> {
        debug!("Sending request");
        self.inner.create(order).await.map_err(|e| OrderError::ActorCommunicationError(e.to_string()))
    }

    /// Turns a cart into an order.
    ///
    /// The cart is taken out of the cart store in one request before the
    /// order is recorded, so a cart yields at most one order. A cart that is
    /// missing or already taken returns `CartUnavailable`.
    #[instrument(skip(self, checkout))]
    pub async fn place_order(&self, cart_id: String, checkout: ValidatedCheckout) -> Result<String, OrderError> {
        info!("Processing place_order request");

        // Step 1: Check cart. An empty cart is left in place.
        match self.cart_client.get_cart(cart_id.clone()).await {
            Ok(Some(cart)) if cart.is_empty() => {
                error!("Cart is empty");
                return Err(OrderError::EmptyCart);
            }
            Ok(Some(_)) => {}
            Ok(None) => {
                error!("Cart not found");
                return Err(OrderError::CartUnavailable(cart_id));
            }
            Err(e) => {
                error!(error = %e, "Cart lookup failed");
                return Err(OrderError::CartUnavailable(format!("Cart lookup failed: {}", e)));
            }
        }

        // Step 2: Take cart
        let cart = match self.cart_client.take_cart(cart_id.clone()).await {
            Ok(cart) => cart,
            Err(CartError::NotFound(id)) => {
                error!(cart_id = %id, "Cart was taken by another submission");
                return Err(OrderError::CartUnavailable(id));
            }
            Err(e) => {
                error!(error = %e, "Failed to take cart");
                return Err(OrderError::CartUnavailable(format!("Failed to take cart: {}", e)));
            }
        };
        if cart.is_empty() {
            error!("Cart was emptied before it was taken");
            return Err(OrderError::EmptyCart);
        }

        // Step 3: Price cart
        let breakdown = price(&cart, &self.rates);
        info!(subtotal = breakdown.subtotal, total = breakdown.total, "Cart priced");

        // Step 4: Record order
        let params = OrderCreate {
            date: chrono::Local::now().date_naive(),
            total: round_cents(breakdown.total),
            status: OrderStatus::Processing,
            items: cart
                .lines
                .iter()
                .map(|line| OrderItem { name: line.name.clone(), quantity: line.quantity, price: line.price })
                .collect(),
            delivery: Some(DeliveryDetails {
                address: checkout.address,
                payment_method: checkout.payment.kind(),
                special_instructions: checkout.special_instructions,
            }),
        };
        let order_id = self.record_order(params).await?;
        info!(order_id = %order_id, "Order recorded");

        Ok(order_id)
    }

    /// Orders still in fulfilment.
    pub async fn current_orders(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.list_orders().await?;
        Ok(orders.into_iter().filter(|o| o.status.is_active()).collect())
    }

    /// Delivered and cancelled orders.
    pub async fn past_orders(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.list_orders().await?;
        Ok(orders.into_iter().filter(|o| o.status.is_terminal()).collect())
    }

    #[instrument(skip(self))]
    pub async fn advance_status(&self, id: String) -> Result<StatusChanged, OrderError> {
        self.transition(id, OrderAction::AdvanceStatus).await
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: String) -> Result<StatusChanged, OrderError> {
        self.transition(id, OrderAction::Cancel).await
    }

    async fn transition(&self, id: String, action: OrderAction) -> Result<StatusChanged, OrderError> {
        debug!("Sending request");
        let changed = self.inner.perform_action(id.clone(), action).await.map_err(|e| match e {
            FrameworkError::NotFound { .. } => OrderError::NotFound(id),
            FrameworkError::Rejected(reason) => OrderError::InvalidTransition(reason),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })?;
        info!(from = %changed.from, to = %changed.to, "Order status changed");
        Ok(changed)
    }
}
