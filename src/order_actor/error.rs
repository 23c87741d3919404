use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Cart unavailable: {0}")]
    CartUnavailable(String),
    #[error("Cannot place an order from an empty cart")]
    EmptyCart,
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
