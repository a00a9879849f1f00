use serde::Deserialize;

use crate::models::users::entities::UserRole;

// 用户注册请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// 显示名称
    pub name: String,
    /// 邮箱，全局唯一
    pub email: String,
    /// 明文密码，仅在注册时经过，存储前哈希
    pub password: String,
    /// 角色，缺省为学生
    #[serde(default)]
    pub role: Option<UserRole>,
}

// 用户登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// 更新资料请求
//
// 部分更新：缺省字段保持原值；bio 显式传入空串时会被置空。
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
}
