//! Typed clients over the resource actors.

mod macros;
mod catalog_client;
mod cart_client;
mod order_client;

pub use catalog_client::*;
pub use cart_client::*;
pub use order_client::*;
