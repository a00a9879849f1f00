use serde::Serialize;

// 选课列表行：学生名与课程名均已解析
#[derive(Debug, Serialize)]
pub struct EnrollmentRow {
    pub id: i64,
    pub student: String,
    pub course: String,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
