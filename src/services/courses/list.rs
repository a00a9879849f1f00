use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::ApiResponse;

// 课程列表对所有已认证用户开放
pub async fn handle_list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses().await {
        Ok(courses) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(courses, "Courses retrieved")))
        }
        Err(e) => {
            error!("Failed to list courses: {}", e);
            Ok(crate::services::error_response(&e))
        }
    }
}
