use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::catalog::{Customer, Flower};

/// 订单状态
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Failed,
}

/// One line of an order batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderItem {
    pub flower_id: u64,
    /// Must be positive; checked by the request layer
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub customer: Customer,
    pub flower_id: u64,
    pub flower_name: String,
    /// Unit price at the time the order was created
    pub unit_price: u64,
    pub quantity: u32,
    pub total_price: u64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// New order in `Pending` status with the price snapshotted from `flower`
    pub fn pending(id: u64, customer: Customer, flower: &Flower, quantity: u32) -> Self {
        Self {
            id,
            customer,
            flower_id: flower.id,
            flower_name: flower.name.clone(),
            unit_price: flower.price,
            quantity,
            total_price: flower.price * u64::from(quantity),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn confirm(&mut self) {
        debug_assert_eq!(self.status, OrderStatus::Pending);
        self.status = OrderStatus::Confirmed;
    }

    pub fn fail(&mut self) {
        debug_assert_eq!(self.status, OrderStatus::Pending);
        self.status = OrderStatus::Failed;
    }
}

/// Tracking URL of an order and its shortened share link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingLink {
    pub tracking_url: String,
    pub short_code: String,
    pub share_link: String,
}

/// Result of one batch item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Confirmed { order: Order, tracking: TrackingLink },
    /// Flower exists but stock was insufficient; the order was not logged
    Rejected { order: Order, reason: String },
    FlowerNotFound { flower_id: u64 },
}

impl OrderOutcome {
    pub fn status(&self) -> OrderStatus {
        match self {
            OrderOutcome::Confirmed { .. } => OrderStatus::Confirmed,
            OrderOutcome::Rejected { .. } | OrderOutcome::FlowerNotFound { .. } => {
                OrderStatus::Failed
            }
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, OrderOutcome::Confirmed { .. })
    }
}

/// Full view of a confirmed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub order: Order,
    /// Current catalog state of the ordered flower
    pub flower: Flower,
    pub tracking: TrackingLink,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_order_snapshots_price() {
        let mut flower = Flower::new(3, "Royal Red Rose", 500, 8, "img");
        let customer = Customer::new(102, "Dubai Floral Shop", "buyer@dubaifloral.com");
        let order = Order::pending(1, customer, &flower, 3);

        flower.price = 900;

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.unit_price, 500);
        assert_eq!(order.total_price, 1500);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(OrderStatus::Confirmed.to_string(), "Confirmed");
        assert_eq!(OrderStatus::Failed.as_ref(), "Failed");
        assert_eq!("Pending".parse::<OrderStatus>().unwrap(), OrderStatus::Pending);
    }
}
