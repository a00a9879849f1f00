use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::users::entities::UserRole;

pub async fn handle_create_course(
    service: &CourseService,
    course_request: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => return Ok(crate::services::missing_identity_response()),
    };

    // 权限校验：只有教师可以创建课程
    match user.role {
        UserRole::Teacher => {}
        UserRole::Student => {
            return Ok(HttpResponse::Forbidden()
                .json(ApiResponse::error_empty("Only teachers can create courses")));
        }
    }

    if course_request.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty("Title is required")));
    }

    // 课程归属固定为当前教师
    match storage.create_course(user.id, course_request).await {
        Ok(course) => {
            info!("Course {} created by teacher {}", course.id, user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(course, "Course created")))
        }
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
