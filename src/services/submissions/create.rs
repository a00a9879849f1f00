use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::submissions::requests::CreateSubmissionRequest;

pub async fn handle_submit(
    service: &SubmissionService,
    submission_request: CreateSubmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => return Ok(crate::services::missing_identity_response()),
    };

    // 归属校验：作业必须存在，且提交者已选其所属课程
    let assignment = match storage
        .get_assignment_by_id(submission_request.assignment_id)
        .await
    {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Assignment not found"))
            );
        }
        Err(e) => return Ok(crate::services::error_response(&e)),
    };

    match storage.is_enrolled(user.id, assignment.course_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                "You are not enrolled in this course",
            )));
        }
        Err(e) => return Ok(crate::services::error_response(&e)),
    }

    match storage.create_submission(user.id, submission_request).await {
        Ok(submission) => {
            info!(
                "Submission {} created for assignment {} by user {}",
                submission.id, assignment.id, user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(submission, "Submission created")))
        }
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
