use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::auth::{LoginRequest, responses::AuthResponse};
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let codec = service.get_codec(request);

    // 1. 必填字段检查
    if login_request.email.trim().is_empty() || login_request.password.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty("Missing credentials")));
    }

    // 2. 根据邮箱获取用户并验证密码
    match storage.get_user_by_email(login_request.email.trim()).await {
        Ok(Some(user)) => {
            if verify_password(&login_request.password, &user.password_hash) {
                // 3. 签发令牌
                match codec.issue(user.id) {
                    Ok(access_token) => {
                        tracing::info!("User {} logged in successfully", user.email);

                        let response = AuthResponse {
                            user,
                            access_token,
                            expires_in: codec.expires_in(),
                        };

                        Ok(HttpResponse::Ok()
                            .json(ApiResponse::success(response, "Login successful")))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            "Login failed, unable to generate token",
                        )))
                    }
                }
            } else {
                Ok(HttpResponse::Unauthorized()
                    .json(ApiResponse::error_empty("Invalid credentials")))
            }
        }
        Ok(None) => {
            Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty("Invalid credentials")))
        }
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
