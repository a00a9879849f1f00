use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub submission_id: i64,
    // 评分教师
    pub teacher_id: i64,
    // 等级码，如 "A" / "B+"，不限定为数值
    pub grade: String,
    pub feedback: Option<String>,
    pub graded_at: chrono::DateTime<chrono::Utc>,
}
