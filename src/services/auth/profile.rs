use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::auth::{UpdateProfileRequest, responses::UserInfoResponse};
use crate::utils::validate::{validate_bio, validate_name};

use super::AuthService;

// 获取个人资料
pub async fn handle_get_profile(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(crate::services::missing_identity_response()),
    };

    // 重新读取而非复用中间件加载的副本，保证拿到的是当前值
    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "Profile retrieved",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("User not found"))),
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}

// 更新个人资料
//
// 部分更新：name 为空串视同未提供；bio 提供空串时置空。
pub async fn handle_update_profile(
    service: &AuthService,
    update_request: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(crate::services::missing_identity_response()),
    };

    if let Some(name) = update_request.name.as_deref()
        && !name.is_empty()
        && let Err(msg) = validate_name(name)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }

    if let Some(bio) = update_request.bio.as_deref()
        && let Err(msg) = validate_bio(bio)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }

    match storage.update_profile(user_id, update_request).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "Profile updated",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("User not found"))),
        Err(e) => Ok(crate::services::error_response(&e)),
    }
}
