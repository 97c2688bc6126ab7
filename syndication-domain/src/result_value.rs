//! 拉取/推送结果（ResultValue）
//!
//! 同步引擎报告的结果只有三种形态：失败标记、携带消息的结构化错误、成功值。
//! 在总线边界解码一次，下游分类只需对封闭集合做穷尽匹配。
//!
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultValue {
    /// 失败标记（宿主语义下的假值）
    Failure,
    /// 结构化错误
    EngineError {
        code: Option<String>,
        message: Option<String>,
    },
    /// 成功：拉取时为新/更新文章的 ID，推送时为目标端 ID，附带可选 info
    Success {
        value: Value,
        info: Option<Value>,
    },
}

impl ResultValue {
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success {
            value: value.into(),
            info: None,
        }
    }

    pub fn engine_error(message: impl Into<String>) -> Self {
        Self::EngineError {
            code: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// 附加推送钩子的 info 参数（仅对成功值生效）
    pub fn with_info(self, info: Option<Value>) -> Self {
        match self {
            Self::Success { value, .. } => Self::Success { value, info },
            other => other,
        }
    }

    /// 从钩子参数解码
    ///
    /// - 假值（`false`、`null`、`0`、`0.0`、`""`、`"0"`、`[]`）→ `Failure`
    /// - `error` 为真值或 `errors` 非空的对象 → `EngineError`
    /// - 其余 → `Success`
    pub fn from_hook_arg(value: &Value) -> Self {
        if is_falsy(value) {
            return Self::Failure;
        }

        if let Value::Object(obj) = value {
            if let Some(err) = obj.get("error").filter(|e| !is_falsy(e)) {
                return engine_error_from(err);
            }
            if let Some(Value::Object(errors)) = obj.get("errors").filter(|e| !is_falsy(e)) {
                if !errors.is_empty() {
                    return engine_error_from_code_map(errors);
                }
            }
        }

        Self::Success {
            value: value.clone(),
            info: None,
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

fn engine_error_from(err: &Value) -> ResultValue {
    match err {
        Value::String(message) => ResultValue::EngineError {
            code: None,
            message: non_blank(message),
        },
        Value::Object(obj) => ResultValue::EngineError {
            code: obj.get("code").and_then(Value::as_str).and_then(non_blank),
            message: obj.get("message").and_then(Value::as_str).and_then(non_blank),
        },
        _ => ResultValue::EngineError {
            code: None,
            message: None,
        },
    }
}

// 宿主错误对象的序列化形态：{"errors": {"<code>": ["<message>", ...]}}
fn engine_error_from_code_map(errors: &Map<String, Value>) -> ResultValue {
    let first = errors.iter().next();
    let code = first.and_then(|(code, _)| non_blank(code));
    let message = first.and_then(|(_, messages)| match messages {
        Value::Array(list) => list.first().and_then(Value::as_str).and_then(non_blank),
        Value::String(s) => non_blank(s),
        _ => None,
    });
    ResultValue::EngineError { code, message }
}

fn non_blank(s: &str) -> Option<String> {
    (!s.trim().is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values_decode_to_failure() {
        for v in [
            json!(false),
            json!(null),
            json!(0),
            json!(0.0),
            json!(""),
            json!("0"),
            json!([]),
        ] {
            assert_eq!(ResultValue::from_hook_arg(&v), ResultValue::Failure, "{v}");
        }
    }

    #[test]
    fn truthy_scalars_decode_to_success() {
        for v in [
            json!(true),
            json!(7),
            json!("0.0"),
            json!(" "),
            json!([0]),
            json!({}),
            json!({ "result": 301, "error": null }),
            json!({ "result": 301, "error": false }),
            json!({ "result": 301, "errors": {} }),
        ] {
            assert!(ResultValue::from_hook_arg(&v).is_success(), "{v}");
        }
    }

    #[test]
    fn error_shapes_decode_to_engine_error() {
        assert_eq!(
            ResultValue::from_hook_arg(&json!({ "error": "remote refused" })),
            ResultValue::engine_error("remote refused")
        );
        assert_eq!(
            ResultValue::from_hook_arg(&json!({ "error": { "code": "http", "message": "timeout" } })),
            ResultValue::EngineError {
                code: Some("http".into()),
                message: Some("timeout".into()),
            }
        );
        assert_eq!(
            ResultValue::from_hook_arg(&json!({ "errors": { "push-failed": ["bad auth", "x"] } })),
            ResultValue::EngineError {
                code: Some("push-failed".into()),
                message: Some("bad auth".into()),
            }
        );
    }

    #[test]
    fn blank_error_message_is_dropped() {
        assert_eq!(
            ResultValue::from_hook_arg(&json!({ "error": "  " })),
            ResultValue::EngineError {
                code: None,
                message: None,
            }
        );
    }

    #[test]
    fn info_only_attaches_to_success() {
        let info = Some(json!({ "remote": true }));
        assert_eq!(
            ResultValue::success(3).with_info(info.clone()),
            ResultValue::Success {
                value: json!(3),
                info,
            }
        );
        assert_eq!(
            ResultValue::Failure.with_info(Some(json!(1))),
            ResultValue::Failure
        );
    }
}
