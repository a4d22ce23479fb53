use std::sync::Arc;

use serde_json::Value;

use crate::error::{BoxedError, FlowError};

/// data -> Error 的统一构造器。
/// 源语言里 constructor / factory 的运行时区分在这里坍缩成同一种函数形态，
/// 直接实例化类型走 [`ErrorCreator::of`] 薄适配。
#[derive(Clone)]
pub struct ErrorCreator {
    create_fn: Arc<dyn Fn(&Value) -> BoxedError + Send + Sync>,
}

impl ErrorCreator {
    /// factory 形式：普通函数 data -> Error
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> BoxedError + Send + Sync + 'static,
    {
        Self {
            create_fn: Arc::new(f),
        }
    }

    /// constructor 形式：按类型直接实例化
    pub fn of<E>() -> Self
    where
        E: FlowError + for<'a> From<&'a Value> + 'static,
    {
        Self::new(|data| Box::new(E::from(data)))
    }

    pub fn create(&self, data: &Value) -> BoxedError {
        (self.create_fn)(data)
    }
}

impl std::fmt::Debug for ErrorCreator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ErrorCreator")
    }
}
