use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::users::entities::UserRole;

// 角色条件查询：
// 学生先取已选课程的ID集合，再按集合过滤作业；教师只看自己创建的作业。
pub async fn handle_list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => return Ok(crate::services::missing_identity_response()),
    };

    let result = match user.role {
        UserRole::Student => match storage.list_enrolled_course_ids(user.id).await {
            Ok(course_ids) => storage.list_assignments_by_courses(&course_ids).await,
            Err(e) => Err(e),
        },
        UserRole::Teacher => storage.list_assignments_by_teacher(user.id).await,
    };

    match result {
        Ok(assignments) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(assignments, "Assignments retrieved")))
        }
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
