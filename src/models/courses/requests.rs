use serde::Deserialize;

// 创建课程请求
//
// 归属教师固定为当前登录教师，不接受指定他人。
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: Option<String>,
}
