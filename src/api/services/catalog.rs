//! 商品与客户查询接口

use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::trace;

use crate::api::helpers::success_response;
use crate::api::types::{CustomerView, FlowerView};
use crate::catalog::Catalog;

pub struct CatalogService;

impl CatalogService {
    /// `GET /flowers`
    pub async fn list_flowers(catalog: web::Data<Arc<Catalog>>) -> impl Responder {
        let flowers: Vec<FlowerView> = catalog.list_flowers().iter().map(FlowerView::from).collect();
        trace!("Catalog API: returning {} flowers", flowers.len());
        success_response(&flowers)
    }

    /// `GET /customers`
    pub async fn list_customers(catalog: web::Data<Arc<Catalog>>) -> impl Responder {
        let customers: Vec<CustomerView> = catalog
            .list_customers()
            .iter()
            .map(CustomerView::from)
            .collect();
        success_response(&customers)
    }
}

pub fn catalog_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/flowers", web::get().to(CatalogService::list_flowers))
        .route("/customers", web::get().to(CatalogService::list_customers));
}
