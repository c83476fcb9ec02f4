use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::trace;

use crate::api::helpers::success_response;
use crate::api::types::HealthResponse;
use crate::catalog::Catalog;
use crate::links::LinkRegistry;
use crate::orders::OrderProcessor;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

pub struct HealthService;

impl HealthService {
    /// Liveness probe with aggregate sizes
    pub async fn health_check(
        catalog: web::Data<Arc<Catalog>>,
        orders: web::Data<Arc<OrderProcessor>>,
        links: web::Data<Arc<LinkRegistry>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        trace!("Received health check request");

        let now = chrono::Utc::now();
        success_response(&HealthResponse {
            status: "healthy".to_string(),
            started_at: app_start_time.start_datetime,
            uptime_seconds: (now - app_start_time.start_datetime).num_seconds().max(0),
            flowers: catalog.flower_count(),
            orders: orders.order_count(),
            links: links.len(),
        })
    }
}

pub fn health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(HealthService::health_check));
}
