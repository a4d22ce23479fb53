use std::sync::Arc;

use crate::creator::ErrorCreator;
use crate::handler::ErrorHandler;
use crate::registry::{ErrorRegistry, DEFAULT_SEEKERS};
use crate::store::RegistryStore;

/// 注册中心构造器。seekers / baseError 构造后不可变，
/// 初始 errors / handlers 在这里一次性写入 store。
#[derive(Default)]
pub struct RegistryBuilder {
    seekers: Vec<String>,
    base_error: Option<ErrorCreator>,
    store: RegistryStore,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 查找顺序即优先级；空列表视为未设置，build 时落回默认值
    pub fn seekers<I, S>(mut self, seekers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seekers = seekers.into_iter().map(Into::into).collect();
        self
    }

    pub fn base_error(mut self, creator: ErrorCreator) -> Self {
        self.base_error = Some(creator);
        self
    }

    pub fn error(mut self, key: impl ToString, creator: ErrorCreator) -> Self {
        self.store.set_creator(key, creator);
        self
    }

    pub fn handler(mut self, key: impl ToString, handler: Arc<dyn ErrorHandler>) -> Self {
        self.store.set_handler(key, handler);
        self
    }

    pub fn build(self) -> ErrorRegistry {
        let seekers = if self.seekers.is_empty() {
            DEFAULT_SEEKERS.iter().map(|s| s.to_string()).collect()
        } else {
            self.seekers
        };
        ErrorRegistry::with_parts(seekers, self.base_error, self.store)
    }
}
