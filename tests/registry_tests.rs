use std::sync::{Arc, Mutex};

use anyhow::Result;
use errflow::{
    register_errors, register_handlers, BasicError, BoxedError, ErrorCreator, ErrorHandler,
    ErrorRegistry, FlowError, FnHandler,
};
use serde_json::{json, Value};

fn tagged(tag: &'static str) -> ErrorCreator {
    ErrorCreator::new(move |data: &Value| -> BoxedError {
        Box::new(BasicError::new(tag, format!("{tag} error")).with_data(data.clone()))
    })
}

fn noop_handler() -> Arc<dyn ErrorHandler> {
    Arc::new(FnHandler(
        |_: &dyn FlowError, _: &[Value]| -> Result<()> { Ok(()) },
    ))
}

#[test]
fn snapshot_lists_sorted_keys_of_both_maps() {
    let registry = ErrorRegistry::new();
    registry.register_error("B", tagged("B"));
    registry.register_error("A", tagged("A"));
    registry.register_handler("Z", noop_handler());
    registry.register_handler("Y", noop_handler());

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.seekers, vec!["code".to_string(), "status".to_string()]);
    assert_eq!(snapshot.errors, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(snapshot.handlers, vec!["Y".to_string(), "Z".to_string()]);
}

#[test]
fn snapshot_is_serializable() {
    let registry = ErrorRegistry::new();
    registry.register_error(404, tagged("NotFound"));

    let json = serde_json::to_value(registry.snapshot()).unwrap();
    assert_eq!(json["errors"], json!(["404"]));
}

#[test]
fn bulk_registration_macros() {
    let registry = ErrorRegistry::new();
    register_errors!(registry, {
        "NOT_FOUND" => tagged("NotFoundError"),
        500 => tagged("InternalError"),
    });
    register_handlers!(registry, {
        "NOT_FOUND" => noop_handler(),
    });

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.errors, vec!["500".to_string(), "NOT_FOUND".to_string()]);
    assert_eq!(snapshot.handlers, vec!["NOT_FOUND".to_string()]);
    assert_eq!(
        registry.create_error(&json!({"code": "NOT_FOUND"})).error_type(),
        "NotFoundError"
    );
}

#[test]
fn fn_handler_receives_error_and_context() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_in_handler = seen.clone();
    let registry = ErrorRegistry::new();
    registry.register_handler(
        "X",
        Arc::new(FnHandler(
            move |error: &dyn FlowError, context: &[Value]| -> Result<()> {
                assert_eq!(error.error_type(), "SomeError");
                seen_in_handler.lock().unwrap().extend(context.iter().cloned());
                Ok(())
            },
        )),
    );

    let err = BasicError::new("SomeError", "x").with_data(json!({"code": "X"}));
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(registry.handle_error(&err, &[json!("a"), json!("b")]))
        .unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![json!("a"), json!("b")]);
}

// 全局注册中心是进程级单例，相关断言集中在一个用例里
#[tokio::test]
async fn global_registry_is_set_once() {
    let registry = Arc::new(
        ErrorRegistry::builder()
            .error("NOT_FOUND", tagged("NotFoundError"))
            .build(),
    );

    // 未初始化时走兜底，不报错
    let err = errflow::global::create_error(&json!({"code": "NOT_FOUND"}));
    assert_eq!(err.error_type(), "Error");

    errflow::set_global_registry(registry.clone()).unwrap();
    assert!(errflow::get_global_registry().is_some());
    assert!(errflow::set_global_registry(registry).is_err());

    let err = errflow::global::create_error(&json!({"code": "NOT_FOUND"}));
    assert_eq!(err.error_type(), "NotFoundError");

    // 未注册 handler：全局分发也是静默 no-op
    errflow::global::handle_error(err.as_ref(), &[]).await.unwrap();
}
