use std::sync::{Arc, Mutex};

use anyhow::Result;
use serde_json::Value;
use tracing::trace;

use crate::builder::RegistryBuilder;
use crate::creator::ErrorCreator;
use crate::error::{BasicError, BoxedError, FlowError};
use crate::handler::ErrorHandler;
use crate::resolver;
use crate::store::RegistryStore;

/// seekers 未配置或为空时使用的默认查找顺序
pub const DEFAULT_SEEKERS: [&str; 2] = ["code", "status"];

/// 错误注册中心：错误创建与分发的统一入口。
/// 一个实例内共享一份 store，注册操作立即对后续调用可见。
pub struct ErrorRegistry {
    seekers: Vec<String>,
    base_error: Option<ErrorCreator>,
    store: Mutex<RegistryStore>,
}

impl ErrorRegistry {
    pub fn new() -> Self {
        RegistryBuilder::new().build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn with_parts(
        seekers: Vec<String>,
        base_error: Option<ErrorCreator>,
        store: RegistryStore,
    ) -> Self {
        Self {
            seekers,
            base_error,
            store: Mutex::new(store),
        }
    }

    pub fn seekers(&self) -> &[String] {
        &self.seekers
    }

    pub(crate) fn store(&self) -> std::sync::MutexGuard<'_, RegistryStore> {
        self.store.lock().unwrap()
    }

    /// 创建错误：registry 命中 -> baseError -> 通用兜底。
    /// 对任意形状的 data 都不失败；creator 自身 panic 则原样上抛。
    pub fn create_error(&self, data: &Value) -> BoxedError {
        if let Some(key) = resolver::seek(data, &self.seekers) {
            let creator = self.store().get_creator(&key);
            if let Some(creator) = creator {
                return creator.create(data);
            }
            trace!("no creator registered under key {key}");
        }
        if let Some(base) = &self.base_error {
            return base.create(data);
        }
        Box::new(BasicError::from_data(data))
    }

    /// 分发错误：seeker 命中的 handler 优先；未命中时按 error_type 回退；
    /// 两条路都没有 handler 则静默完成。handler 返回的 Err 原样上抛。
    pub async fn handle_error(&self, error: &dyn FlowError, context: &[Value]) -> Result<()> {
        // 先克隆出 handler 再 await，锁不跨 await 持有
        let handler = {
            let store = self.store();
            resolver::seek_error(error, &self.seekers)
                .and_then(|key| store.get_handler(&key))
                .or_else(|| store.get_handler(error.error_type()))
        };
        match handler {
            Some(handler) => handler.handle(error, context).await,
            None => {
                trace!("no handler registered for error_type {}", error.error_type());
                Ok(())
            }
        }
    }

    pub fn register_error(&self, key: impl ToString, creator: ErrorCreator) {
        self.store().set_creator(key, creator);
    }

    pub fn unregister_error(&self, key: impl ToString) {
        self.store().remove_creator(&key.to_string());
    }

    pub fn register_handler(&self, key: impl ToString, handler: Arc<dyn ErrorHandler>) {
        self.store().set_handler(key, handler);
    }

    pub fn unregister_handler(&self, key: impl ToString) {
        self.store().remove_handler(&key.to_string());
    }

    /// 同时清空 creator 表与 handler 表
    pub fn clear(&self) {
        self.store().clear();
    }
}

impl Default for ErrorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
