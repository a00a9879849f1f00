use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::dashboard::responses::DashboardResponse;
use crate::models::users::entities::UserRole;

// 工作台：当前用户及其相关课程
// 学生返回已选课程，教师返回所授课程
pub async fn handle_overview(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => return Ok(crate::services::missing_identity_response()),
    };

    let courses = match user.role {
        UserRole::Student => storage.list_enrolled_courses(user.id).await,
        UserRole::Teacher => storage.list_courses_by_teacher(user.id).await,
    };

    match courses {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DashboardResponse { user, courses },
            "Dashboard data loaded",
        ))),
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
