/// 批量注册错误构造器
#[macro_export]
macro_rules! register_errors {
    (
        $registry:expr, {
            $( $key:expr => $creator:expr ),* $(,)?
        }
    ) => {
        $(
            $registry.register_error($key, $creator);
        )*
    };
}

/// 批量注册错误处理器
#[macro_export]
macro_rules! register_handlers {
    (
        $registry:expr, {
            $( $key:expr => $handler:expr ),* $(,)?
        }
    ) => {
        $(
            $registry.register_handler($key, $handler);
        )*
    };
}
