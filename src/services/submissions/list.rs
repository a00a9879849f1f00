use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::users::entities::UserRole;

// 角色条件查询：学生看自己的提交，教师看自己作业收到的提交
pub async fn handle_list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => return Ok(crate::services::missing_identity_response()),
    };

    let result = match user.role {
        UserRole::Student => storage.list_submissions_by_student(user.id).await,
        UserRole::Teacher => storage.list_submissions_by_teacher(user.id).await,
    };

    match result {
        Ok(submissions) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submissions, "Submissions retrieved")))
        }
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
