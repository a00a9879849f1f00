use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::enrollments::requests::EnrollRequest;

pub async fn handle_enroll(
    service: &EnrollmentService,
    enroll_request: EnrollRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(crate::services::missing_identity_response()),
    };

    // 课程存在性与重复选课检查在存储层事务内完成
    match storage.enroll_student(user_id, enroll_request.course_id).await {
        Ok(enrollment) => {
            info!(
                "User {} enrolled in course {}",
                user_id, enrollment.course_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(enrollment, "Enrolled successfully")))
        }
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
