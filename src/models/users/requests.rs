use crate::models::users::entities::UserRole;

// 新用户写入参数（密码已在服务层哈希）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}
