use serde::Deserialize;

// 创建作业请求
//
// due_date 为 ISO-8601 字符串，解析失败返回 400。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub course_id: i64,
    pub due_date: Option<String>,
}

// 作业写入参数（截止时间已在服务层解析）
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub title: String,
    pub description: Option<String>,
    pub course_id: i64,
    pub teacher_id: i64,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}
