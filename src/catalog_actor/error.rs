use thiserror::Error;

/// Errors that can occur during catalog lookups.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog load rejected: {0}")]
    LoadRejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
