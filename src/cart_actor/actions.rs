use crate::domain::{Cart, CartChange, MenuItem};

/// Mutations that can be performed on a cart.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds the item with quantity 1, or increments its existing line.
    AddOrIncrement(MenuItem),
    /// Sets a line's quantity. A quantity of 0 removes the line.
    SetQuantity { line_id: String, quantity: u32 },
    /// Removes a line. Removing a missing line is a no-op.
    Remove(String),
}

/// Outcome of a cart action together with the resulting cart.
#[derive(Debug, Clone)]
pub struct CartActionResult {
    pub change: CartChange,
    pub cart: Cart,
}
