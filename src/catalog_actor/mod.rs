//! Read-only restaurant catalog, loaded once at startup.

pub mod entity;
pub mod error;

pub use error::*;
