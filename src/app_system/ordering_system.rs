use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::checkout::Checkout;
use crate::clients::{CartClient, CatalogClient, OrderClient};
use crate::domain::{Cart, Order, Restaurant};
use crate::notification::Notifier;
use super::error::SystemError;
use super::seed;
use super::settings::Settings;

fn sequential_ids(format: fn(u64) -> String) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = AtomicU64::new(1);
    move || format(counter.fetch_add(1, Ordering::SeqCst))
}

/// The ordering application: catalog, cart and order actors wired together.
///
/// Responsible for starting up actors, loading mock data, and handling shutdown.
pub struct OrderingSystem {
    pub catalog_client: CatalogClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub checkout: Checkout,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderingSystem {
    pub async fn start(settings: Settings, notifier: Arc<dyn Notifier>) -> Result<Self, SystemError> {
        info!("Starting ordering system");
        let buffer_size = settings.actors.buffer_size;

        // 1. Catalog
        let (catalog_actor, catalog_resource_client) =
            ResourceActor::<Restaurant>::new(buffer_size, sequential_ids(|n| n.to_string()));
        let catalog_client = CatalogClient::new(catalog_resource_client);
        let catalog_handle = tokio::spawn(catalog_actor.run());

        // 2. Carts
        let (cart_actor, cart_resource_client) =
            ResourceActor::<Cart>::new(buffer_size, sequential_ids(|n| format!("cart_{}", n)));
        let cart_client = CartClient::new(
            cart_resource_client,
            catalog_client.clone(),
            Arc::clone(&notifier),
            settings.checkout.promo_code.clone(),
        );
        let cart_handle = tokio::spawn(cart_actor.run());

        // 3. Orders
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(buffer_size, sequential_ids(|n| format!("ORD{:03}", n)));
        let order_client = OrderClient::new(order_resource_client, cart_client.clone(), settings.pricing);
        let order_handle = tokio::spawn(order_actor.run());

        let checkout = Checkout::new(order_client.clone(), notifier, settings.redirect_delay());

        // 4. Mock data
        for restaurant in seed::restaurants() {
            catalog_client.load_restaurant(restaurant).await?;
        }
        for order in seed::order_history() {
            order_client.record_order(order).await?;
        }
        info!("Ordering system ready");

        Ok(Self {
            catalog_client,
            cart_client,
            order_client,
            checkout,
            handles: vec![catalog_handle, cart_handle, order_handle],
        })
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        // Actors stop once every client clone is dropped.
        drop(self.checkout);
        drop(self.order_client);
        drop(self.cart_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
