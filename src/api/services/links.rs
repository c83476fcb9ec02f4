//! 短链接口：生成短链与查询统计

use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::helpers::{api_result, error_response, success_response};
use crate::api::types::{LinkStatsView, ShortenRequest, ShortenResponse};
use crate::context::PublicUrls;
use crate::errors::ShopError;
use crate::links::{DEFAULT_PURPOSE, LinkRegistry};

pub struct LinkService;

impl LinkService {
    /// `POST /api/shorten`
    pub async fn shorten(
        body: web::Json<ShortenRequest>,
        links: web::Data<Arc<LinkRegistry>>,
        urls: web::Data<PublicUrls>,
    ) -> impl Responder {
        let request = body.into_inner();

        // 只校验非空，哈希使用原始字节
        let Some(original_url) = request.url.filter(|u| !u.is_empty()) else {
            return error_response(&ShopError::validation("Missing required field: url"));
        };
        let purpose = request
            .purpose
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PURPOSE.to_string());

        let short_code = links.shorten(&original_url, &purpose);
        info!("Link API: shortened {} as {}", original_url, short_code);

        success_response(&ShortenResponse {
            success: true,
            short_url: urls.share_link(&short_code),
            original_url,
            short_code,
            purpose,
        })
    }

    /// `GET /api/link-stats/{short_code}`
    pub async fn link_stats(
        path: web::Path<String>,
        links: web::Data<Arc<LinkRegistry>>,
    ) -> impl Responder {
        let code = path.into_inner();
        debug!("Link API: stats requested for {}", code);

        api_result(links.get_stats(&code), |record| {
            success_response(&LinkStatsView::from(&record))
        })
    }
}

pub fn link_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/shorten", web::post().to(LinkService::shorten))
            .route("/link-stats/{short_code}", web::get().to(LinkService::link_stats)),
    );
}
