use serde::Serialize;

// 提交列表行：作业名已解析
#[derive(Debug, Serialize)]
pub struct SubmissionRow {
    pub id: i64,
    pub assignment: String,
    pub content: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
