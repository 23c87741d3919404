use crate::domain::OrderStatus;

/// Status transitions driven from outside the ordering flow (kitchen, courier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Moves the order to the next fulfilment status.
    AdvanceStatus,
    /// Cancels an order that has not reached a terminal status.
    Cancel,
}

/// The status after a successful transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChanged {
    pub from: OrderStatus,
    pub to: OrderStatus,
}
