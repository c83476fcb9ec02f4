use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::models::{Order, OrderDetails, OrderItem, OrderOutcome, TrackingLink};
use crate::catalog::{Catalog, Customer};
use crate::context::PublicUrls;
use crate::errors::{Result, ShopError};
use crate::links::{LinkRegistry, PURPOSE_ORDER_TRACKING};

/// Append-only log of confirmed orders, kept in id order
///
/// Ids come from a counter that is never derived from the log length, so an
/// id handed to an order that later failed is never reused.
#[derive(Debug)]
pub struct OrderLog {
    orders: RwLock<Vec<Order>>,
    next_id: AtomicU64,
}

impl Default for OrderLog {
    fn default() -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配下一个订单号（从 1 开始单调递增）
    pub fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Insert a confirmed order at its id position.
    ///
    /// Concurrent batches may confirm a later id first.
    pub fn append(&self, order: Order) {
        let mut orders = self.orders.write();
        let index = orders.partition_point(|o| o.id < order.id);
        orders.insert(index, order);
    }

    pub fn get(&self, id: u64) -> Option<Order> {
        let orders = self.orders.read();
        orders
            .binary_search_by_key(&id, |o| o.id)
            .ok()
            .map(|index| orders[index].clone())
    }

    pub fn list(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}

/// Turns order batches into reservations, logged orders and tracking links.
pub struct OrderProcessor {
    catalog: Arc<Catalog>,
    links: Arc<LinkRegistry>,
    log: OrderLog,
    urls: PublicUrls,
    default_customer: Customer,
}

impl OrderProcessor {
    /// Fails when `default_customer_id` is not in the catalog.
    pub fn new(
        catalog: Arc<Catalog>,
        links: Arc<LinkRegistry>,
        urls: PublicUrls,
        default_customer_id: u64,
    ) -> Result<Self> {
        let default_customer = catalog.get_customer(default_customer_id).map_err(|_| {
            ShopError::config(format!(
                "Default customer {} does not exist",
                default_customer_id
            ))
        })?;

        Ok(Self {
            catalog,
            links,
            log: OrderLog::new(),
            urls,
            default_customer,
        })
    }

    /// Process every item independently and return one outcome per item, in
    /// input order. A failing item never aborts the rest of the batch.
    pub fn place_orders_batch(&self, items: &[OrderItem]) -> Vec<OrderOutcome> {
        let outcomes: Vec<OrderOutcome> = items.iter().map(|item| self.place_order(item)).collect();

        let confirmed = outcomes.iter().filter(|o| o.is_confirmed()).count();
        info!(
            "Order batch processed: {} items, {} confirmed, {} failed",
            outcomes.len(),
            confirmed,
            outcomes.len() - confirmed
        );
        outcomes
    }

    fn place_order(&self, item: &OrderItem) -> OrderOutcome {
        let flower = match self.catalog.get_flower(item.flower_id) {
            Ok(flower) => flower,
            Err(_) => {
                debug!("Order item references unknown flower {}", item.flower_id);
                return OrderOutcome::FlowerNotFound {
                    flower_id: item.flower_id,
                };
            }
        };

        let order_id = self.log.allocate_id();
        let mut order = Order::pending(
            order_id,
            self.default_customer.clone(),
            &flower,
            item.quantity,
        );

        match self.catalog.reserve(flower.id, item.quantity) {
            Ok(true) => {
                order.confirm();
                self.log.append(order.clone());
                let tracking = self.tracking_link(order.id);
                info!(
                    "Order {} confirmed: {} x {} = {} (tracking {})",
                    order.id, order.quantity, order.flower_name, order.total_price, tracking.short_code
                );
                OrderOutcome::Confirmed { order, tracking }
            }
            Ok(false) => {
                order.fail();
                warn!(
                    "Order {} failed: insufficient stock for {} (requested {})",
                    order.id, flower.name, item.quantity
                );
                OrderOutcome::Rejected {
                    order,
                    reason: format!("Insufficient stock for {}", flower.name),
                }
            }
            // 商品不会被删除，这里只是防御
            Err(_) => OrderOutcome::FlowerNotFound {
                flower_id: item.flower_id,
            },
        }
    }

    /// Build the tracking link of an order, creating the short code on first
    /// use. Later calls return the same code and leave the record untouched.
    pub fn tracking_link(&self, order_id: u64) -> TrackingLink {
        let tracking_url = self.urls.tracking_url(order_id);
        let short_code = self.links.shorten(&tracking_url, PURPOSE_ORDER_TRACKING);
        let share_link = self.urls.share_link(&short_code);

        TrackingLink {
            tracking_url,
            short_code,
            share_link,
        }
    }

    /// Full projection of a logged order. Unknown ids change no state.
    pub fn get_order_details(&self, order_id: u64) -> Result<OrderDetails> {
        let order = self
            .log
            .get(order_id)
            .ok_or_else(|| ShopError::not_found(format!("Order not found: {}", order_id)))?;
        let flower = self.catalog.get_flower(order.flower_id)?;
        let tracking = self.tracking_link(order.id);

        Ok(OrderDetails {
            order,
            flower,
            tracking,
        })
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.log.list()
    }

    pub fn order_count(&self) -> usize {
        self.log.len()
    }

    pub fn default_customer(&self) -> &Customer {
        &self.default_customer
    }
}
