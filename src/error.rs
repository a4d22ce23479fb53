use serde_json::Value;

/// 兜底错误的 error_type（无注册、无 baseError 时使用）
pub const GENERIC_ERROR_TYPE: &str = "Error";

/// 兜底错误的默认 message
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// 可被注册中心创建 / 分发的错误模型
pub trait FlowError: std::error::Error + Send + Sync {
    /// 错误判别名，如 "NotFoundError"，可用于 handler 回退匹配
    fn error_type(&self) -> &str;

    /// seeker 查找钩子：错误通过它暴露自己的路由字段（如 code / status）
    fn field(&self, _name: &str) -> Option<Value> {
        None
    }
}

pub type BoxedError = Box<dyn FlowError>;

/// 通用错误结构：兜底路径与简单调用方共用
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct BasicError {
    pub error_type: String,
    pub message: String,
    pub data: Value,
}

impl BasicError {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            data: Value::Null,
        }
    }

    /// 附带原始 data，后续 handler 分发仍可按 seeker 解析
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// 最后兜底：从任意 data 构造通用错误，永不失败
    pub fn from_data(data: &Value) -> Self {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR_MESSAGE)
            .to_string();
        Self {
            error_type: GENERIC_ERROR_TYPE.to_string(),
            message,
            data: data.clone(),
        }
    }
}

impl FlowError for BasicError {
    fn error_type(&self) -> &str {
        &self.error_type
    }

    fn field(&self, name: &str) -> Option<Value> {
        self.data.get(name).cloned()
    }
}
