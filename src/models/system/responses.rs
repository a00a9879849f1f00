use serde::Serialize;

// 存活探针响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
