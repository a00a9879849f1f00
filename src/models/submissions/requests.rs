use serde::Deserialize;

// 提交作业请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    pub assignment_id: i64,
    pub content: String,
    // 可选的附件引用，文件本体的上传不在本服务职责内
    pub file_path: Option<String>,
}
