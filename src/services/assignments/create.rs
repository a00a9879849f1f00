use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::assignments::requests::{CreateAssignmentRequest, NewAssignment};
use crate::models::users::entities::UserRole;
use crate::utils::datetime::parse_due_date;

pub async fn handle_create_assignment(
    service: &AssignmentService,
    assignment_request: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => return Ok(crate::services::missing_identity_response()),
    };

    // 权限校验：只有教师可以创建作业
    match user.role {
        UserRole::Teacher => {}
        UserRole::Student => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                "Only teachers can create assignments",
            )));
        }
    }

    if assignment_request.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty("Title is required")));
    }

    // 截止时间必须可解析
    let due_date = match assignment_request.due_date.as_deref() {
        Some(raw) => match parse_due_date(raw) {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty("Invalid due date format")));
            }
        },
        None => None,
    };

    // 归属校验：课程必须存在且由当前教师开设
    let course = match storage.get_course_by_id(assignment_request.course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Course not found"))
            );
        }
        Err(e) => return Ok(crate::services::error_response(&e)),
    };

    if course.teacher_id != user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            "You can only create assignments for your own courses",
        )));
    }

    let new_assignment = NewAssignment {
        title: assignment_request.title,
        description: assignment_request.description,
        course_id: course.id,
        teacher_id: user.id,
        due_date,
    };

    match storage.create_assignment(new_assignment).await {
        Ok(assignment) => {
            info!(
                "Assignment {} created in course {} by teacher {}",
                assignment.id, course.id, user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "Assignment created")))
        }
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
