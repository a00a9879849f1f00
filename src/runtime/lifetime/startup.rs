use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
///
/// 初始化存储层并完成数据库迁移。配置由调用方传入，
/// 这里不读取任何全局状态。
pub async fn prepare_server_startup(config: &AppConfig) -> StartupContext {
    let storage = crate::storage::create_storage(&config.database)
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    StartupContext { storage }
}
