use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::users::entities::UserRole;

// 角色条件查询：学生看自己的选课，教师看所授课程的选课
pub async fn handle_list_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => return Ok(crate::services::missing_identity_response()),
    };

    let result = match user.role {
        UserRole::Student => storage.list_enrollments_by_student(user.id).await,
        UserRole::Teacher => storage.list_enrollments_by_teacher(user.id).await,
    };

    match result {
        Ok(enrollments) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(enrollments, "Enrollments retrieved")))
        }
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
