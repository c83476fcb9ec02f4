//! HTTP API
//!
//! Thin actix-web adapters over the application context: request parsing,
//! JSON projections and status mapping.

pub mod helpers;
pub mod middleware;
pub mod services;
pub mod types;

use actix_web::web;

use crate::context::AppContext;
use services::{
    AppStartTime, catalog_routes, health_routes, link_routes, order_routes, redirect_routes,
};

/// Register the context's aggregates as app data and mount every route.
///
/// ```ignore
/// App::new().configure(petalshop::api::configure(ctx.clone()))
/// ```
pub fn configure(ctx: AppContext) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(ctx.catalog.clone()))
            .app_data(web::Data::new(ctx.orders.clone()))
            .app_data(web::Data::new(ctx.links.clone()))
            .app_data(web::Data::new(ctx.urls.clone()))
            .app_data(web::Data::new(AppStartTime {
                start_datetime: ctx.started_at,
            }))
            .app_data(helpers::json_config())
            .configure(catalog_routes)
            .configure(order_routes)
            .configure(link_routes)
            .configure(redirect_routes)
            .configure(health_routes);
    }
}
