use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ApiResponse;
use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

// 存活探针，无需认证
pub async fn health() -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.health().await
}

// 未匹配路由的兜底响应
pub async fn not_found() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Endpoint not found")))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/health").route("", web::get().to(health)));
}
