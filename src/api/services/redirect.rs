//! 短链跳转

use actix_web::http::header::{HeaderValue, LOCATION};
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::{debug, trace};

use crate::api::helpers::error_response;
use crate::errors::ShopError;
use crate::links::{LinkRegistry, is_valid_short_code};

pub struct RedirectService;

impl RedirectService {
    /// `GET /t/{short_code}`: 302 to the original URL, counting one click.
    pub async fn handle_redirect(
        path: web::Path<String>,
        links: web::Data<Arc<LinkRegistry>>,
    ) -> impl Responder {
        let code = path.into_inner();

        if !is_valid_short_code(&code) {
            // 非法短码直接 404，不查询注册表
            trace!("Invalid short code rejected: {}", code);
            return error_response(&ShopError::not_found(format!(
                "Short code not found: {}",
                code
            )));
        }

        // 先校验跳转目标，无法跳转的请求不计点击
        let location = match links.get_stats(&code) {
            Ok(record) => match HeaderValue::from_str(&record.original_url) {
                Ok(location) => location,
                Err(_) => {
                    return error_response(&ShopError::internal(format!(
                        "Target of {} cannot be used as a redirect location",
                        code
                    )));
                }
            },
            Err(e) => return error_response(&e),
        };

        // 记录不会被覆盖，计数后的 URL 与上面校验的一致
        if let Err(e) = links.expand(&code) {
            return error_response(&e);
        }

        debug!("Redirecting {} -> {:?}", code, location);
        HttpResponse::Found()
            .insert_header((LOCATION, location))
            .finish()
    }
}

pub fn redirect_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/t/{short_code}", web::get().to(RedirectService::handle_redirect));
}
