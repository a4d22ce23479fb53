use std::sync::Arc;

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::warn;

use crate::error::{BasicError, BoxedError, FlowError};
use crate::registry::ErrorRegistry;

/// 全局错误注册中心（只允许设置一次）
pub static GLOBAL_ERROR_REGISTRY: OnceCell<Arc<ErrorRegistry>> = OnceCell::new();

/// 设置全局注册中心（建议在系统初始化阶段设置一次）
pub fn set_global_registry(registry: Arc<ErrorRegistry>) -> Result<()> {
    GLOBAL_ERROR_REGISTRY
        .set(registry)
        .map_err(|_| anyhow!("GLOBAL_ERROR_REGISTRY already set"))
}

/// 从全局中获取注册中心（供其他模块使用）
pub fn get_global_registry() -> Option<&'static Arc<ErrorRegistry>> {
    GLOBAL_ERROR_REGISTRY.get()
}

/// 用全局注册中心创建错误；未初始化时直接走通用兜底
pub fn create_error(data: &Value) -> BoxedError {
    match get_global_registry() {
        Some(registry) => registry.create_error(data),
        None => {
            warn!("GLOBAL_ERROR_REGISTRY not initialized");
            Box::new(BasicError::from_data(data))
        }
    }
}

/// 用全局注册中心分发错误；未初始化时静默完成
pub async fn handle_error(error: &dyn FlowError, context: &[Value]) -> Result<()> {
    match get_global_registry() {
        Some(registry) => registry.handle_error(error, context).await,
        None => {
            warn!("GLOBAL_ERROR_REGISTRY not initialized");
            Ok(())
        }
    }
}
