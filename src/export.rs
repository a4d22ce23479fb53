use serde::Serialize;

use crate::registry::ErrorRegistry;

/// 可序列化的注册表快照（key 已排序）
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySnapshot {
    pub seekers: Vec<String>,
    pub errors: Vec<String>,
    pub handlers: Vec<String>,
}

impl ErrorRegistry {
    /// 导出当前已注册的全部 key，供诊断 / 前端展示使用
    pub fn snapshot(&self) -> RegistrySnapshot {
        let store = self.store();
        RegistrySnapshot {
            seekers: self.seekers().to_vec(),
            errors: store.creator_keys(),
            handlers: store.handler_keys(),
        }
    }
}
