use thiserror::Error;

use crate::domain::ValidationErrors;
use crate::order_actor::OrderError;

/// Errors that can occur while checking out.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Checkout validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Checkout already submitted")]
    AlreadySubmitted,
    #[error("Order placement failed: {0}")]
    Order(#[from] OrderError),
    #[error("Submission task failed: {0}")]
    Interrupted(String),
}
