use std::fmt;

use chrono::NaiveDate;

use super::checkout::{Address, PaymentMethodKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Processing,
    Preparing,
    /// Reported by external couriers; the ordering flow never sets it.
    #[allow(dead_code)]
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Current orders are still in fulfilment; the rest are history.
    pub fn is_active(self) -> bool {
        !self.is_terminal()
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// The next fulfilment status, or `None` once terminal.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Processing => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::OutForDelivery),
            OrderStatus::Shipped => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// A named milestone in an order's fulfilment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStep {
    pub id: String,
    pub name: &'static str,
    pub completed: bool,
    pub current: bool,
}

const PROGRESS_STEPS: [&str; 4] = ["Order Placed", "Preparing", "Out for Delivery", "Delivered"];

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryDetails {
    pub address: Address,
    pub payment_method: PaymentMethodKind,
    pub special_instructions: Option<String>,
}

/// Represents a placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub date: NaiveDate,
    pub total: f64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub delivery: Option<DeliveryDetails>,
}

/// Payload for recording a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub date: NaiveDate,
    pub total: f64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub delivery: Option<DeliveryDetails>,
}

impl Order {
    /// Progress steps derived from the status. Cancelled orders have none.
    pub fn progress_steps(&self) -> Option<Vec<ProgressStep>> {
        // Index of the current step; PROGRESS_STEPS.len() means all done.
        let current = match self.status {
            OrderStatus::Cancelled => return None,
            OrderStatus::Processing => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::Shipped | OrderStatus::OutForDelivery => 2,
            OrderStatus::Delivered => PROGRESS_STEPS.len(),
        };

        let steps = PROGRESS_STEPS
            .iter()
            .enumerate()
            .map(|(idx, name)| ProgressStep {
                id: format!("Step {}", idx + 1),
                name,
                completed: idx < current,
                current: idx == current,
            })
            .collect();
        Some(steps)
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: OrderStatus) -> Order {
        Order {
            id: "ORD001".into(),
            date: NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
            total: 31.97,
            status,
            items: vec![
                OrderItem { name: "Margherita Pizza".into(), quantity: 1, price: 12.99 },
                OrderItem { name: "Garlic Bread".into(), quantity: 2, price: 5.99 },
            ],
            delivery: None,
        }
    }

    fn flags(order: &Order) -> Vec<(bool, bool)> {
        order.progress_steps().unwrap().iter().map(|s| (s.completed, s.current)).collect()
    }

    #[test]
    fn out_for_delivery_is_third_step() {
        let steps = order(OrderStatus::OutForDelivery).progress_steps().unwrap();
        assert_eq!(steps[2].id, "Step 3");
        assert_eq!(steps[2].name, "Out for Delivery");
        assert_eq!(
            flags(&order(OrderStatus::OutForDelivery)),
            vec![(true, false), (true, false), (false, true), (false, false)]
        );
    }

    #[test]
    fn steps_for_each_status() {
        assert_eq!(
            flags(&order(OrderStatus::Processing)),
            vec![(false, true), (false, false), (false, false), (false, false)]
        );
        assert_eq!(
            flags(&order(OrderStatus::Preparing)),
            vec![(true, false), (false, true), (false, false), (false, false)]
        );
        assert_eq!(flags(&order(OrderStatus::Shipped)), flags(&order(OrderStatus::OutForDelivery)));
        assert_eq!(flags(&order(OrderStatus::Delivered)), vec![(true, false); 4]);
        assert!(order(OrderStatus::Cancelled).progress_steps().is_none());
    }

    #[test]
    fn status_sequence_ends_at_terminal() {
        let mut status = OrderStatus::Processing;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![OrderStatus::Processing, OrderStatus::Preparing, OrderStatus::OutForDelivery, OrderStatus::Delivered]
        );
        assert!(!OrderStatus::Cancelled.is_active());
        assert!(OrderStatus::Shipped.is_active());
        assert_eq!(OrderStatus::OutForDelivery.to_string(), "Out for Delivery");
    }

    #[test]
    fn counts_items() {
        assert_eq!(order(OrderStatus::Delivered).item_count(), 3);
    }
}
