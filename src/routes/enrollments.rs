use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::EnrollRequest;
use crate::services::EnrollmentService;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn list_enrollments(request: HttpRequest) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.list_enrollments(&request).await
}

pub async fn enroll(
    request: HttpRequest,
    enroll_data: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .enroll(enroll_data.into_inner(), &request)
        .await
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/enrollments")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_enrollments))
            .route("", web::post().to(enroll)),
    );
}
