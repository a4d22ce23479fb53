use std::collections::HashMap;
use std::sync::Arc;

use crate::creator::ErrorCreator;
use crate::handler::ErrorHandler;

/// 两张相互独立的映射表：creator 表与 handler 表。
/// key 统一规范化为字符串（数字 key 先 to_string 再存取）。
#[derive(Default)]
pub struct RegistryStore {
    creators: HashMap<String, ErrorCreator>,
    handlers: HashMap<String, Arc<dyn ErrorHandler>>,
}

impl RegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖，不报错不合并
    pub fn set_creator(&mut self, key: impl ToString, creator: ErrorCreator) {
        self.creators.insert(key.to_string(), creator);
    }

    pub fn get_creator(&self, key: &str) -> Option<ErrorCreator> {
        self.creators.get(key).cloned()
    }

    /// 不存在时为 no-op
    pub fn remove_creator(&mut self, key: &str) {
        self.creators.remove(key);
    }

    pub fn set_handler(&mut self, key: impl ToString, handler: Arc<dyn ErrorHandler>) {
        self.handlers.insert(key.to_string(), handler);
    }

    pub fn get_handler(&self, key: &str) -> Option<Arc<dyn ErrorHandler>> {
        self.handlers.get(key).cloned()
    }

    pub fn remove_handler(&mut self, key: &str) {
        self.handlers.remove(key);
    }

    /// 同时清空两张表
    pub fn clear(&mut self) {
        self.creators.clear();
        self.handlers.clear();
    }

    pub fn creator_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.creators.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn handler_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.handlers.keys().cloned().collect();
        keys.sort();
        keys
    }
}
