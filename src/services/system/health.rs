use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::system::responses::HealthResponse;

// 存活探针，不要求认证，也不触碰存储层
pub async fn handle_health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        HealthResponse { status: "OK" },
        "LMS Backend is running",
    )))
}
