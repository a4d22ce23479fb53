use serde_json::Value;

use crate::creator::ErrorCreator;
use crate::error::{BasicError, BoxedError};
use crate::register_errors;
use crate::registry::ErrorRegistry;

fn http_creator(error_type: &'static str, default_message: &'static str) -> ErrorCreator {
    ErrorCreator::new(move |data: &Value| -> BoxedError {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(default_message)
            .to_string();
        Box::new(BasicError::new(error_type, message).with_data(data.clone()))
    })
}

/// 注册常见 HTTP 状态码对应的错误构造器
pub fn register_http_errors(registry: &ErrorRegistry) {
    register_errors!(registry, {
        400 => http_creator("BadRequestError", "Bad request"),
        401 => http_creator("UnauthorizedError", "Unauthorized"),
        403 => http_creator("ForbiddenError", "Forbidden"),
        404 => http_creator("NotFoundError", "Not found"),
        409 => http_creator("ConflictError", "Conflict"),
        429 => http_creator("TooManyRequestsError", "Too many requests"),
        500 => http_creator("InternalServerError", "Internal server error"),
        503 => http_creator("ServiceUnavailableError", "Service unavailable"),
    });
}
