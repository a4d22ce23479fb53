//! 错误注册与分发中心：
//! 按 seeker 顺序从任意数据中解析 lookup key，
//! 创建注册过的错误类型并把错误路由到对应 handler。

// 1. 公共错误模型
pub mod error;
pub use error::{BasicError, BoxedError, FlowError};

// 2. 构造器与处理器
pub mod creator;
pub use creator::ErrorCreator;
pub mod handler;
pub use handler::{ErrorHandler, FnHandler};

// 3. seeker 解析器
pub mod resolver;
pub use resolver::{seek, seek_error};

// 4. 注册中心
pub mod store;
pub mod registry;
pub use registry::{ErrorRegistry, DEFAULT_SEEKERS};
pub mod builder;
pub use builder::RegistryBuilder;

// 5. 注册宏
#[macro_use]
pub mod macros;

// 6. 快照导出
pub mod export;
pub use export::RegistrySnapshot;

// 7. 全局注册中心
pub mod global;
pub use global::{get_global_registry, set_global_registry};

// 8. 内置错误注册器
pub mod builtin;
pub use builtin::register_http_errors;
