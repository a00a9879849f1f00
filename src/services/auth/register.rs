use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::{RegisterRequest, responses::AuthResponse};
use crate::models::users::{entities::UserRole, requests::NewUser};
use crate::models::ApiResponse;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_name, validate_password};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let codec = service.get_codec(request);

    // 1. 必填字段检查
    if register_request.name.trim().is_empty()
        || register_request.email.trim().is_empty()
        || register_request.password.is_empty()
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("Missing required fields")));
    }

    // 2. 字段格式校验
    if let Err(msg) = validate_name(&register_request.name) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }
    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }
    if let Err(msg) = validate_password(&register_request.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }

    // 3. 检查邮箱是否已注册
    match storage.get_user_by_email(&register_request.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict()
                .json(ApiResponse::error_empty("User already exists")));
        }
        Ok(None) => {}
        Err(e) => return Ok(crate::services::error_response(&e)),
    }

    // 4. 哈希密码
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty("Registration failed")));
        }
    };

    // 5. 创建用户并签发令牌，角色缺省为学生
    let new_user = NewUser {
        name: register_request.name.trim().to_string(),
        email: register_request.email.trim().to_string(),
        password_hash,
        role: register_request.role.unwrap_or(UserRole::Student),
    };

    match storage.create_user(new_user).await {
        Ok(user) => match codec.issue(user.id) {
            Ok(access_token) => {
                tracing::info!("User {} registered successfully", user.email);
                let response = AuthResponse {
                    user,
                    access_token,
                    expires_in: codec.expires_in(),
                };
                Ok(HttpResponse::Created()
                    .json(ApiResponse::success(response, "User registered")))
            }
            Err(e) => {
                tracing::error!("Failed to generate JWT token: {}", e);
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    "Registration succeeded but token generation failed",
                )))
            }
        },
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
