use serde_json::Value;

use crate::error::FlowError;

/// 非 Null 值规范化为 lookup key：字符串原样使用，数字 / 布尔等走 to_string
fn key_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// 按 seeker 顺序扫描 record，返回第一个非 Null 字段的 key。
/// 解析是位置性的：命中第一个非 Null 值后立即返回，
/// 该 key 在 registry 中查不查得到由上层决定，不在这里继续扫描。
pub fn seek(record: &Value, seekers: &[String]) -> Option<String> {
    seekers
        .iter()
        .find_map(|seeker| record.get(seeker).and_then(key_of))
}

/// 同一算法作用在错误值上，字段通过 [`FlowError::field`] 读取
pub fn seek_error(error: &dyn FlowError, seekers: &[String]) -> Option<String> {
    seekers
        .iter()
        .find_map(|seeker| error.field(seeker).and_then(|value| key_of(&value)))
}
