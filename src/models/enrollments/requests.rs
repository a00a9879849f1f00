use serde::Deserialize;

// 选课请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub course_id: i64,
}
