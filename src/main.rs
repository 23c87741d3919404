mod domain;
mod clients;
mod checkout;
mod notification;
mod router;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod catalog_actor;
mod cart_actor;
mod order_actor;

use std::sync::Arc;

use tracing::{error, info, warn, Instrument};
use crate::app_system::{setup_tracing, OrderingSystem, Settings};
use crate::checkout::{CheckoutError, CheckoutSession, SubmissionOutcome};
use crate::domain::{price, round_cents, CuisineFilter, PaymentMethodKind, CUISINE_TYPES};
use crate::notification::TracingNotifier;
use crate::router::Route;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let settings = Settings::load().map_err(|e| e.to_string())?;
    info!(?settings, "Starting food ordering application");

    // Start every actor and load the mock catalog and order history
    let system = OrderingSystem::start(settings.clone(), Arc::new(TracingNotifier))
        .await
        .map_err(|e| e.to_string())?;

    // Browse: the home page search and cuisine filter
    let span = tracing::info_span!("browse", route = %Route::parse("/"));
    async {
        let tags: Vec<&str> = std::iter::once("All").chain(CUISINE_TYPES).collect();
        for tag in &tags {
            let filter = CuisineFilter::from_tag(tag);
            let restaurants = system.catalog_client.search("", &filter).await.map_err(|e| e.to_string())?;
            info!(filter = %filter, count = restaurants.len(), "Filtered restaurants");
        }
        let selected = CuisineFilter::from_tag("Italian");
        let chips: Vec<String> = tags
            .iter()
            .map(|tag| if selected.is_active(tag) { format!("[{}]", tag) } else { tag.to_string() })
            .collect();
        info!(?chips, "Filter bar");
        let found = system.catalog_client.search("pizza", &CuisineFilter::All).await.map_err(|e| e.to_string())?;
        info!(count = found.len(), "Searched for \"pizza\"");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Restaurant detail pages, including one that does not exist
    for path in ["/restaurant/1", "/restaurant/42", "/about"] {
        match Route::parse(path) {
            Route::Restaurant(id) => match system.catalog_client.get_restaurant(id.clone()).await {
                Ok(Some(restaurant)) => info!(
                    name = %restaurant.name,
                    rating = restaurant.rating,
                    dishes = restaurant.menu.len(),
                    reviews = restaurant.reviews.len(),
                    "Restaurant page"
                ),
                Ok(None) => warn!(restaurant_id = %id, "Restaurant not found"),
                Err(e) => error!(error = %e, "Catalog lookup failed"),
            },
            other => warn!(path, route = %other, "No page for route"),
        }
    }

    // Cart: add dishes, change a quantity, try promo codes
    let span = tracing::info_span!("cart", route = %Route::Cart);
    let cart_id = async {
        let cart_id = system.cart_client.open_cart(Vec::new()).await.map_err(|e| e.to_string())?;
        for item_id in ["m1", "m3", "m4"] {
            system
                .cart_client
                .add_to_cart(cart_id.clone(), "1".into(), item_id.into())
                .await
                .map_err(|e| e.to_string())?;
        }
        system.cart_client.set_quantity(cart_id.clone(), "m3".into(), 2).await.map_err(|e| e.to_string())?;
        let cart = system.cart_client.remove_item(cart_id.clone(), "m4".into()).await.map_err(|e| e.to_string())?;

        let breakdown = price(&cart, &settings.pricing);
        info!(
            lines = cart.len(),
            subtotal = round_cents(breakdown.subtotal),
            delivery_fee = round_cents(breakdown.delivery_fee),
            tax = round_cents(breakdown.tax),
            total = round_cents(breakdown.total),
            "Order summary"
        );

        system.cart_client.apply_promo_code("FREEFOOD");
        system.cart_client.apply_promo_code("save10");
        Ok::<String, String>(cart_id)
    }
    .instrument(span)
    .await?;

    // Checkout: walk the wizard, then submit
    let mut session = CheckoutSession::new();
    let span = tracing::info_span!("checkout", route = %Route::Checkout, cart_id = %cart_id);
    let outcome = async {
        if let Err(e) = session.advance() {
            let fields: Vec<String> = session.errors().0.iter().map(|f| format!("{}: {}", f.field, f.message)).collect();
            warn!(error = %e, ?fields, "Address incomplete");
        }
        session
            .edit(|draft| {
                draft.address.full_name = "John Doe".into();
                draft.address.street_address = "123 Main St".into();
                draft.address.city = "Anytown".into();
                draft.address.state = "NY".into();
                draft.address.zip_code = "12345".into();
                draft.address.phone_number = "555-123-4567".into();
            })
            .map_err(|e| e.to_string())?;
        session.advance().map_err(|e| e.to_string())?;

        // Step back to the address form; nothing entered is lost
        let stage = session.back();
        info!(?stage, city = %session.draft().address.city, "Went back");
        session.advance().map_err(|e| e.to_string())?;

        session
            .edit(|draft| {
                draft.payment.method = Some(PaymentMethodKind::CreditCard);
                draft.payment.card_number = "4111 1111 1111 1111".into();
                draft.payment.expiry_date = "12/27".into();
                draft.payment.cvv = "123".into();
                draft.special_instructions = "Leave at the door".into();
                draft.terms_accepted = true;
            })
            .map_err(|e| e.to_string())?;
        session.advance().map_err(|e| e.to_string())?;
        info!(stage = ?session.stage(), "Reviewing order");

        // A submission the user backs out of
        let pending = system.checkout.submit(&mut session, cart_id.clone()).map_err(|e| e.to_string())?;
        let cancelled = pending.cancel().await.map_err(|e| e.to_string())?;
        info!(outcome = ?cancelled, "Submission withdrawn");
        session.reopen();

        let pending = system.checkout.submit(&mut session, cart_id.clone()).map_err(|e| e.to_string())?;
        Ok::<_, String>(pending.wait().await)
    }
    .instrument(span)
    .await?;

    let placed = match outcome {
        Ok(SubmissionOutcome::Placed { order_id, redirect }) => {
            info!(order_id = %order_id, redirect = %redirect, "Order processed successfully");
            Some(order_id)
        }
        Ok(SubmissionOutcome::Cancelled) => {
            warn!("Order submission cancelled");
            None
        }
        Err(CheckoutError::Order(e)) => {
            error!(error = %e, "Order processing failed");
            session.reopen();
            None
        }
        Err(e) => {
            error!(error = %e, "Order processing failed");
            None
        }
    };

    // Kitchen and courier updates
    let span = tracing::info_span!("fulfilment");
    async {
        if let Some(order_id) = placed {
            match system.order_client.advance_status(order_id.clone()).await {
                Ok(changed) => info!(from = %changed.from, to = %changed.to, "Order advanced"),
                Err(e) => error!(error = %e, "Status update failed"),
            }
            if let Ok(Some(order)) = system.order_client.get_order(order_id).await {
                let current = order.progress_steps().unwrap_or_default().into_iter().find(|s| s.current);
                info!(order_id = %order.id, step = ?current.map(|s| s.name), "Order tracking");
            }
        }
        if let Err(e) = system.order_client.cancel_order("ORD003".into()).await {
            warn!(error = %e, "Cancel refused");
        }
    }
    .instrument(span)
    .await;

    // Order history
    let span = tracing::info_span!("orders", route = %Route::Orders);
    async {
        for order in system.order_client.current_orders().await.map_err(|e| e.to_string())? {
            let steps = order.progress_steps().unwrap_or_default();
            let current = steps.iter().find(|s| s.current).map(|s| s.name).unwrap_or("Delivered");
            info!(order_id = %order.id, status = %order.status, step = current, items = order.item_count(), total = order.total, "Current order");
        }
        for order in system.order_client.past_orders().await.map_err(|e| e.to_string())? {
            info!(order_id = %order.id, date = %order.date, status = %order.status, total = order.total, "Past order");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
