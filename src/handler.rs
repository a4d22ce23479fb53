use anyhow::Result;
use serde_json::Value;

use crate::error::FlowError;

/// 错误处理器：副作用由实现方定义（日志、跳转、指标等）。
/// context 是调用方原样透传的一组不透明值。
#[async_trait::async_trait]
pub trait ErrorHandler: Send + Sync {
    async fn handle(&self, error: &dyn FlowError, context: &[Value]) -> Result<()>;
}

/// 把普通同步闭包包装成 handler
pub struct FnHandler<F>(pub F);

#[async_trait::async_trait]
impl<F> ErrorHandler for FnHandler<F>
where
    F: Fn(&dyn FlowError, &[Value]) -> Result<()> + Send + Sync,
{
    async fn handle(&self, error: &dyn FlowError, context: &[Value]) -> Result<()> {
        (self.0)(error, context)
    }
}
