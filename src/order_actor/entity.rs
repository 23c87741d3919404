use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderStatus};
use super::actions::{OrderAction, StatusChanged};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Action = OrderAction;
    type ActionResult = StatusChanged;

    const KIND: &'static str = "order";

    /// Records an order under the generated id.
    ///
    /// # Errors
    /// An order must have at least one item and a non-negative total.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        if params.items.is_empty() {
            return Err("Order has no items".to_string());
        }
        if params.total < 0.0 {
            return Err(format!("Order total is negative: {}", params.total));
        }
        Ok(Self {
            id,
            date: params.date,
            total: params.total,
            status: params.status,
            items: params.items,
            delivery: params.delivery,
        })
    }

    /// Applies an external status transition.
    ///
    /// # Errors
    /// Delivered and cancelled orders accept no further transitions.
    fn handle_action(&mut self, action: OrderAction) -> Result<StatusChanged, String> {
        let from = self.status;
        let to = match action {
            OrderAction::AdvanceStatus => from.next(),
            OrderAction::Cancel => from.is_active().then_some(OrderStatus::Cancelled),
        }
        .ok_or_else(|| format!("order {} is already {}", self.id, from))?;

        self.status = to;
        Ok(StatusChanged { from, to })
    }
}
