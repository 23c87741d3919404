use thiserror::Error;

use crate::catalog_actor::CatalogError;
use crate::order_actor::OrderError;

/// Errors raised while starting or stopping the ordering system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Failed to load order history: {0}")]
    OrderHistory(#[from] OrderError),
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}
