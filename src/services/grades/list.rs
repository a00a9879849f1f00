use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::users::entities::UserRole;

// 角色条件查询：学生看自己提交获得的评分，教师看自己给出的评分
pub async fn handle_list_grades(
    service: &GradeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => return Ok(crate::services::missing_identity_response()),
    };

    let result = match user.role {
        UserRole::Student => storage.list_grades_by_student(user.id).await,
        UserRole::Teacher => storage.list_grades_by_teacher(user.id).await,
    };

    match result {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "Grades retrieved"))),
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
