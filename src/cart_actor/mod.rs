//! Cart-specific domain logic: line item mutations.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
