use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::auth::responses::RefreshTokenResponse;

use super::AuthService;

// 刷新令牌
//
// 身份已由 RequireJWT 验证过，这里直接为其签发新令牌，
// 不再重新校验凭据。
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let codec = service.get_codec(request);

    match RequireJWT::extract_user_id(request) {
        Some(user_id) => match codec.issue(user_id) {
            Ok(access_token) => {
                let response = RefreshTokenResponse {
                    access_token,
                    expires_in: codec.expires_in(),
                };
                Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Token refreshed")))
            }
            Err(e) => {
                tracing::error!("Failed to refresh JWT token: {}", e);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty("Unable to refresh token")))
            }
        },
        None => Ok(crate::services::missing_identity_response()),
    }
}
