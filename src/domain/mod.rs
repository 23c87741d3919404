pub mod catalog;
pub mod cart;
pub mod pricing;
pub mod checkout;
pub mod order;
pub mod promo;

pub use catalog::*;
pub use cart::*;
pub use pricing::*;
pub use checkout::*;
pub use order::*;
pub use promo::*;
