use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::CreateCourseRequest;
use crate::services::CourseService;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_courses(request: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&request).await
}

pub async fn get_course(
    request: HttpRequest,
    course_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .get_course(course_id.into_inner(), &request)
        .await
}

pub async fn create_course(
    request: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &request)
        .await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{course_id}", web::get().to(get_course)),
    );
}
