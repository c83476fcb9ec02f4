//! API 帮助函数

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use tracing::{debug, error};

use crate::errors::ShopError;

use super::types::ErrorBody;

/// Largest accepted JSON body
pub const MAX_JSON_PAYLOAD: usize = 256 * 1024;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}

/// 构建成功响应
pub fn success_response<T: Serialize>(body: &T) -> HttpResponse {
    json_response(StatusCode::OK, body)
}

/// 从 ShopError 构建错误响应（自动映射 HTTP 状态码）
pub fn error_response(err: &ShopError) -> HttpResponse {
    let status = err.http_status();
    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        debug!("Request rejected: {}", err);
    }

    json_response(
        status,
        &ErrorBody {
            success: false,
            error: err.message().to_string(),
            code: err.code().to_string(),
        },
    )
}

/// 统一 Result → HttpResponse 转换
pub fn api_result<T, F>(result: Result<T, ShopError>, project: F) -> HttpResponse
where
    F: FnOnce(T) -> HttpResponse,
{
    match result {
        Ok(data) => project(data),
        Err(e) => error_response(&e),
    }
}

/// Malformed JSON bodies are validation errors with the shop's error body.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let shop_error = ShopError::validation(format!("Invalid JSON body: {}", err));
    let response = error_response(&shop_error);
    InternalError::from_response(err, response).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD)
        .error_handler(json_error_handler)
}
