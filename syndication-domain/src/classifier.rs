//! 结果分类器
//!
//! 将拉取/推送结果归约为统一的 [`Status`]。全函数、无副作用、确定性：
//! - 结构化错误：`ok=false`，消息取错误消息（为空时退回 `"fail"`）；
//! - 失败标记：`ok=false`，消息为 `"fail"`；
//! - 成功：`ok=true`，消息为 `"<清洗后的 guid>,<整数化的结果>"`。
//!
use crate::post::PostRecord;
use crate::result_value::ResultValue;
use crate::sanitize::sanitize_text_field;
use crate::status::Status;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

/// 成功结果整数化策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdCoercion {
    /// 宽松数值转换：非数值退化为 0（与宿主行为兼容）
    #[default]
    Lenient,
    /// 仅接受整数形态的结果，其余视为失败
    Strict,
}

/// 按宽松策略分类
pub fn classify(result: &ResultValue, post: &PostRecord) -> Status {
    classify_with(result, post, IdCoercion::Lenient)
}

pub fn classify_with(result: &ResultValue, post: &PostRecord, coercion: IdCoercion) -> Status {
    match result {
        ResultValue::EngineError { message, .. } => Status::failed(
            message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(Status::FAIL_MESSAGE),
        ),
        ResultValue::Failure => Status::failed(Status::FAIL_MESSAGE),
        ResultValue::Success { value, .. } => {
            let id = match coercion {
                IdCoercion::Lenient => coerce_int(value),
                IdCoercion::Strict => match strict_int(value) {
                    Some(id) => id,
                    None => return Status::failed(format!("invalid result id: {value}")),
                },
            };
            Status::ok(format!("{},{}", sanitize_text_field(post.guid()), id))
        }
    }
}

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("valid regex")
});

/// 宽松整数化
///
/// 整数原样返回；浮点截断（非有限值为 0）；字符串取前导数值部分，否则为 0；
/// `true` 与非空数组/对象为 1；结果在 i64 范围内饱和。
pub fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                i64::MAX
            } else {
                n.as_f64().map(truncate).unwrap_or(0)
            }
        }
        Value::String(s) => coerce_str(s),
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(_) => 1,
    }
}

fn coerce_str(s: &str) -> i64 {
    let Some(m) = NUMERIC_PREFIX.find(s) else {
        return 0;
    };
    let num = m.as_str().trim_start();
    if num.contains(['.', 'e', 'E']) {
        return num.parse::<f64>().map(truncate).unwrap_or(0);
    }
    num.parse::<i64>().unwrap_or_else(|_| {
        if num.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

fn truncate(f: f64) -> i64 {
    // `as` 对越界值饱和，NaN 为 0
    if f.is_finite() { f.trunc() as i64 } else { 0 }
}

fn strict_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
