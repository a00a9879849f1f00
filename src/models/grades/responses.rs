use serde::Serialize;

// 评分列表行
#[derive(Debug, Serialize)]
pub struct GradeRow {
    pub id: i64,
    pub submission: i64,
    pub grade: String,
    pub feedback: Option<String>,
    pub graded_at: chrono::DateTime<chrono::Utc>,
}
