//! 订单接口

use actix_web::{Responder, web};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::helpers::{api_result, error_response, success_response};
use crate::api::types::{
    BatchResponse, OrderDetailsView, OrderItemRequest, OrderView, OutcomeRecord,
};
use crate::catalog::Catalog;
use crate::errors::ShopError;
use crate::orders::{OrderItem, OrderProcessor};

pub struct OrderService;

impl OrderService {
    /// `GET /orders`
    pub async fn list_orders(
        orders: web::Data<Arc<OrderProcessor>>,
        catalog: web::Data<Arc<Catalog>>,
    ) -> impl Responder {
        let flowers: HashMap<u64, _> = catalog
            .list_flowers()
            .into_iter()
            .map(|f| (f.id, f))
            .collect();

        let views: Vec<OrderView> = orders
            .list_orders()
            .iter()
            .map(|order| OrderView::new(order, flowers.get(&order.flower_id)))
            .collect();
        success_response(&views)
    }

    /// `POST /orders`
    ///
    /// The body must be a JSON array of `{flower_id, quantity}`. Validation
    /// failures reject the whole request; stock failures are per-item outcomes.
    pub async fn create_orders(
        body: web::Json<Value>,
        orders: web::Data<Arc<OrderProcessor>>,
    ) -> impl Responder {
        let items = match parse_order_items(body.into_inner()) {
            Ok(items) => items,
            Err(e) => return error_response(&e),
        };

        info!("Order API: processing batch of {} items", items.len());
        let results: Vec<OutcomeRecord> = orders
            .place_orders_batch(&items)
            .iter()
            .map(OutcomeRecord::from)
            .collect();

        success_response(&BatchResponse {
            message: "Batch processed".to_string(),
            results,
        })
    }

    /// `GET /orders/details/{order_id}`
    pub async fn get_order_details(
        path: web::Path<u64>,
        orders: web::Data<Arc<OrderProcessor>>,
    ) -> impl Responder {
        let order_id = path.into_inner();
        debug!("Order API: details requested for order {}", order_id);

        api_result(orders.get_order_details(order_id), |details| {
            success_response(&OrderDetailsView::from(&details))
        })
    }
}

/// Validate a batch body and turn it into order items.
pub fn parse_order_items(body: Value) -> Result<Vec<OrderItem>, ShopError> {
    let Value::Array(raw_items) = body else {
        return Err(ShopError::validation(
            "Invalid format. Expected a list of items.",
        ));
    };

    raw_items
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let item: OrderItemRequest = serde_json::from_value(raw).map_err(|e| {
                ShopError::validation(format!("Invalid order item at index {}: {}", index, e))
            })?;

            let quantity = u32::try_from(item.quantity)
                .ok()
                .filter(|q| *q > 0)
                .ok_or_else(|| {
                    ShopError::validation(format!(
                        "Quantity must be a positive integer (item {}, got {})",
                        index, item.quantity
                    ))
                })?;

            Ok(OrderItem {
                flower_id: item.flower_id,
                quantity,
            })
        })
        .collect()
}

pub fn order_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/orders")
            .route(web::get().to(OrderService::list_orders))
            .route(web::post().to(OrderService::create_orders)),
    )
    .route(
        "/orders/details/{order_id}",
        web::get().to(OrderService::get_order_details),
    );
}
