//! 请求参数反序列化错误处理
//!
//! 将 JSON / 查询参数的解析失败统一映射为 400 信封响应，
//! 避免框架默认的纯文本错误泄露到客户端。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};

use crate::models::ApiResponse;

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        other => format!("Invalid request body: {other}"),
    };

    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(message));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(format!(
        "Invalid query parameters: {err}"
    )));
    InternalError::from_response(err, response).into()
}
