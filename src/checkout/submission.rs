use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, instrument, Instrument};

use crate::clients::OrderClient;
use crate::notification::{Notification, Notifier};
use crate::router::Route;
use super::error::CheckoutError;
use super::session::CheckoutSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The order was recorded; the UI should navigate to `redirect`.
    Placed { order_id: String, redirect: Route },
    /// Cancelled before the delay elapsed. Nothing was recorded.
    Cancelled,
}

/// A submitted checkout waiting out the simulated network delay.
///
/// Dropping the handle does not cancel the submission. The session stays
/// `Submitted` whatever the outcome; after `Cancelled` or a
/// [`CheckoutError::Order`] failure, call [`CheckoutSession::reopen`] to edit again.
pub struct PendingSubmission {
    cancel: oneshot::Sender<()>,
    handle: JoinHandle<Result<SubmissionOutcome, CheckoutError>>,
}

impl PendingSubmission {
    /// Waits for the submission to finish.
    pub async fn wait(self) -> Result<SubmissionOutcome, CheckoutError> {
        let Self { cancel, handle } = self;
        let outcome = handle.await.map_err(|e| CheckoutError::Interrupted(e.to_string()))?;
        drop(cancel);
        outcome
    }

    /// Cancels the submission. If the delay already elapsed, the order stands
    /// and `Placed` is returned.
    pub async fn cancel(self) -> Result<SubmissionOutcome, CheckoutError> {
        let Self { cancel, handle } = self;
        let _ = cancel.send(());
        handle.await.map_err(|e| CheckoutError::Interrupted(e.to_string()))?
    }
}

/// Turns a validated checkout into an order after a fixed delay.
#[derive(Clone)]
pub struct Checkout {
    order_client: OrderClient,
    notifier: Arc<dyn Notifier>,
    delay: Duration,
}

impl Checkout {
    pub fn new(order_client: OrderClient, notifier: Arc<dyn Notifier>, delay: Duration) -> Self {
        Self { order_client, notifier, delay }
    }

    /// Validates the whole form and schedules order placement for `cart_id`.
    ///
    /// Validation happens up front; a failure leaves the session on its
    /// failing stage and schedules nothing. Placement failures (missing,
    /// empty or already ordered cart) surface from the returned handle.
    #[instrument(skip(self, session))]
    pub fn submit(&self, session: &mut CheckoutSession, cart_id: String) -> Result<PendingSubmission, CheckoutError> {
        let checkout = session.submit()?;
        info!(delay_ms = self.delay.as_millis() as u64, "Checkout validated, placing order after delay");

        let (cancel, mut cancel_rx) = oneshot::channel::<()>();
        let order_client = self.order_client.clone();
        let notifier = Arc::clone(&self.notifier);
        let delay = self.delay;

        let span = tracing::info_span!("order_submission", cart_id = %cart_id);
        let handle = tokio::spawn(
            async move {
                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    Ok(()) = &mut cancel_rx => {
                        info!("Submission cancelled before placement");
                        return Ok(SubmissionOutcome::Cancelled);
                    }
                }

                let order_id = order_client.place_order(cart_id, checkout).await?;
                notifier.notify(Notification::info(
                    "Order Placed Successfully!",
                    "Thank you for your order. You will be redirected to order history.",
                ));
                info!(order_id = %order_id, "Order placed");
                Ok(SubmissionOutcome::Placed { order_id, redirect: Route::Orders })
            }
            .instrument(span),
        );

        Ok(PendingSubmission { cancel, handle })
    }
}
