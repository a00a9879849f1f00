use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::ApiResponse;

// 课程详情对所有已认证用户开放
pub async fn handle_get_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_detail(course_id).await {
        Ok(Some(detail)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "Course retrieved")))
        }
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Course not found")))
        }
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
