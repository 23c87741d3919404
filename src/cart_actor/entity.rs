use crate::actor_framework::Entity;
use crate::domain::{Cart, CartCreate};
use super::actions::{CartAction, CartActionResult};

impl Entity for Cart {
    type Id = String;
    type CreateParams = CartCreate;
    type Action = CartAction;
    type ActionResult = CartActionResult;

    const KIND: &'static str = "cart";

    /// Opens a cart, empty or pre-seeded with lines.
    fn from_create_params(id: String, params: CartCreate) -> Result<Self, String> {
        Cart::from_lines(id, params.lines)
    }

    /// Applies a line mutation and returns the resulting snapshot.
    ///
    /// # Errors
    /// A rejected mutation leaves the cart unchanged.
    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, String> {
        let change = match action {
            CartAction::AddOrIncrement(item) => self.add_or_increment(&item)?,
            CartAction::SetQuantity { line_id, quantity } => self.set_quantity(&line_id, quantity),
            CartAction::Remove(line_id) => self.remove(&line_id),
        };
        Ok(CartActionResult { change, cart: self.clone() })
    }
}
