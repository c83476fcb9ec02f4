//! API 请求/响应类型
//!
//! Entities never serialize themselves; every JSON shape the API exposes is a
//! projection defined here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Customer, Flower};
use crate::links::LinkRecord;
use crate::orders::{Order, OrderDetails, OrderOutcome, OrderStatus, TrackingLink};

// ============ Catalog ============

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FlowerView {
    pub id: u64,
    pub name: String,
    pub price: u64,
    /// Available stock
    pub stock: u32,
    pub committed_stock: u32,
    pub img: String,
}

impl From<&Flower> for FlowerView {
    fn from(flower: &Flower) -> Self {
        Self {
            id: flower.id,
            name: flower.name.clone(),
            price: flower.price,
            stock: flower.available_stock,
            committed_stock: flower.committed_stock,
            img: flower.image_url.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CustomerView {
    pub customer_id: u64,
    pub name: String,
    pub email: String,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone(),
        }
    }
}

// ============ Orders ============

/// One element of the `POST /orders` body
#[derive(Deserialize, Clone, Debug)]
pub struct OrderItemRequest {
    pub flower_id: u64,
    /// Signed so that non-positive values reach validation instead of
    /// failing deserialization with an opaque message
    pub quantity: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderCustomerView {
    pub customer_id: u64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderFlowerView {
    pub id: u64,
    pub name: String,
    pub price: u64,
    /// Current available stock, `None` if the flower is gone from the catalog
    pub stock: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderView {
    pub order_id: u64,
    pub customer: OrderCustomerView,
    pub flower: OrderFlowerView,
    pub quantity: u32,
    pub total_price: u64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl OrderView {
    pub fn new(order: &Order, flower: Option<&Flower>) -> Self {
        Self {
            order_id: order.id,
            customer: OrderCustomerView {
                customer_id: order.customer.id,
                name: order.customer.name.clone(),
            },
            flower: OrderFlowerView {
                id: order.flower_id,
                name: order.flower_name.clone(),
                price: order.unit_price,
                stock: flower.map(|f| f.available_stock),
            },
            quantity: order.quantity,
            total_price: order.total_price,
            status: order.status,
            created_at: order.created_at,
        }
    }
}

/// Per-item result of a batch. Fields that do not apply are omitted.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct OutcomeRecord {
    /// Requested flower id, only for items whose flower was not found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flower: Option<String>,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&OrderOutcome> for OutcomeRecord {
    fn from(outcome: &OrderOutcome) -> Self {
        let status = outcome.status();
        match outcome {
            OrderOutcome::Confirmed { order, tracking } => Self {
                order_id: Some(order.id),
                flower: Some(order.flower_name.clone()),
                status,
                quantity: Some(order.quantity),
                total_price: Some(order.total_price),
                tracking_url: Some(tracking.tracking_url.clone()),
                short_code: Some(tracking.short_code.clone()),
                share_link: Some(tracking.share_link.clone()),
                ..Default::default()
            },
            OrderOutcome::Rejected { order, reason } => Self {
                order_id: Some(order.id),
                flower: Some(order.flower_name.clone()),
                status,
                quantity: Some(order.quantity),
                reason: Some(reason.clone()),
                ..Default::default()
            },
            OrderOutcome::FlowerNotFound { flower_id } => Self {
                id: Some(*flower_id),
                status,
                reason: Some("Flower not found".to_string()),
                ..Default::default()
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BatchResponse {
    pub message: String,
    pub results: Vec<OutcomeRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TrackingView {
    pub tracking_url: String,
    pub short_code: String,
    pub share_link: String,
}

impl From<&TrackingLink> for TrackingView {
    fn from(tracking: &TrackingLink) -> Self {
        Self {
            tracking_url: tracking.tracking_url.clone(),
            short_code: tracking.short_code.clone(),
            share_link: tracking.share_link.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderDetailsView {
    pub order_id: u64,
    pub status: OrderStatus,
    pub quantity: u32,
    pub unit_price: u64,
    pub total_price: u64,
    pub created_at: DateTime<Utc>,
    pub customer: CustomerView,
    pub flower: FlowerView,
    pub tracking: TrackingView,
}

impl From<&OrderDetails> for OrderDetailsView {
    fn from(details: &OrderDetails) -> Self {
        let order = &details.order;
        Self {
            order_id: order.id,
            status: order.status,
            quantity: order.quantity,
            unit_price: order.unit_price,
            total_price: order.total_price,
            created_at: order.created_at,
            customer: CustomerView::from(&order.customer),
            flower: FlowerView::from(&details.flower),
            tracking: TrackingView::from(&details.tracking),
        }
    }
}

// ============ Links ============

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ShortenRequest {
    pub url: Option<String>,
    pub purpose: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShortenResponse {
    pub success: bool,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub purpose: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LinkStatsView {
    pub short_code: String,
    pub original_url: String,
    pub purpose: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
}

impl From<&LinkRecord> for LinkStatsView {
    fn from(record: &LinkRecord) -> Self {
        Self {
            short_code: record.short_code.clone(),
            original_url: record.original_url.clone(),
            purpose: record.purpose.clone(),
            click_count: record.click_count,
            created_at: record.created_at,
        }
    }
}

// ============ Common ============

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: i64,
    pub flowers: usize,
    pub orders: usize,
    pub links: usize,
}
