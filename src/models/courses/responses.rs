use serde::Serialize;

// 课程列表行：教师名在引用悬空时为 null
#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub teacher: Option<String>,
}

// 课程详情：含教师名与选课人数
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub teacher: Option<String>,
    pub enrolled_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
