use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::users::entities::UserRole;

pub async fn handle_grade_submission(
    service: &GradeService,
    grade_request: CreateGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => return Ok(crate::services::missing_identity_response()),
    };

    // 权限校验：只有教师可以评分
    match user.role {
        UserRole::Teacher => {}
        UserRole::Student => {
            return Ok(HttpResponse::Forbidden()
                .json(ApiResponse::error_empty("Only teachers can grade")));
        }
    }

    if grade_request.grade.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty("Grade is required")));
    }

    // 归属校验：提交必须存在，且其作业由当前教师创建
    let submission = match storage
        .get_submission_by_id(grade_request.submission_id)
        .await
    {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Submission not found"))
            );
        }
        Err(e) => return Ok(crate::services::error_response(&e)),
    };

    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Assignment not found"))
            );
        }
        Err(e) => return Ok(crate::services::error_response(&e)),
    };

    if assignment.teacher_id != user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            "You can only grade submissions for your own assignments",
        )));
    }

    // 同一提交重复评分时替换，存储层事务内完成
    match storage.upsert_grade(user.id, grade_request).await {
        Ok(grade) => {
            info!(
                "Submission {} graded by teacher {}",
                grade.submission_id, user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(grade, "Grade submitted")))
        }
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
