//! Order processing
//!
//! Batch intake, stock reservation against the catalog and tracking links
//! for confirmed orders.

mod models;
mod processor;

pub use models::{Order, OrderDetails, OrderItem, OrderOutcome, OrderStatus, TrackingLink};
pub use processor::{OrderLog, OrderProcessor};
