use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::CreateGradeRequest;
use crate::services::GradeService;

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn list_grades(request: HttpRequest) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&request).await
}

pub async fn grade_submission(
    request: HttpRequest,
    grade_data: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .grade_submission(grade_data.into_inner(), &request)
        .await
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/grades")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_grades))
            .route("", web::post().to(grade_submission)),
    );
}
