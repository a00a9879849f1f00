use serde::Serialize;

use crate::models::courses::entities::Course;
use crate::models::users::entities::User;

// 工作台响应：当前用户与其相关课程
// 学生为已选课程，教师为所授课程
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: User,
    pub courses: Vec<Course>,
}
