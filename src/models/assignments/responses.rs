use serde::Serialize;

// 作业列表行：课程名已解析，due_date 序列化为 ISO-8601 或 null
#[derive(Debug, Serialize)]
pub struct AssignmentRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub course: String,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}
