use serde::Deserialize;

// 评分请求
//
// 同一提交重复评分时替换原有评分而非追加。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGradeRequest {
    pub submission_id: i64,
    pub grade: String,
    pub feedback: Option<String>,
}
