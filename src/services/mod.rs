//! 业务逻辑层
//!
//! 每个资源一个服务目录，每个操作一个文件。服务在中间件完成
//! 令牌验证之后执行自己的角色与归属检查，两层检查顺序固定。

pub mod assignments;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod grades;
pub mod submissions;
pub mod system;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use enrollments::EnrollmentService;
pub use grades::GradeService;
pub use submissions::SubmissionService;
pub use system::SystemService;

use actix_web::HttpResponse;

use crate::errors::LmsError;
use crate::models::ApiResponse;

// 错误类别到状态码的统一映射
//
// 4xx 类错误的 message 可直接返回给客户端；
// 其余一律 500 且不泄露内部细节。
pub(crate) fn error_response(err: &LmsError) -> HttpResponse {
    match err {
        LmsError::Validation(_) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(err.message()))
        }
        LmsError::Authentication(_) => {
            HttpResponse::Unauthorized().json(ApiResponse::error_empty(err.message()))
        }
        LmsError::Authorization(_) => {
            HttpResponse::Forbidden().json(ApiResponse::error_empty(err.message()))
        }
        LmsError::NotFound(_) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(err.message()))
        }
        LmsError::Conflict(_) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(err.message()))
        }
        _ => {
            tracing::error!("Unhandled internal error: {}", err);
            HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty("Internal server error"))
        }
    }
}

// 辅助函数：受保护路由中缺失用户信息时的兜底响应
pub(crate) fn missing_identity_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty("Unauthorized: missing user id"))
}
