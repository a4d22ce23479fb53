pub mod http;
pub use http::register_http_errors;
