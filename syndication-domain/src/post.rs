//! 文章与站点引用（PostRecord / PostRef / SiteRef / ClientRef）
//!
//! 同步引擎在钩子中传递的文章可能是完整记录，也可能只是数字 ID；
//! 站点可能是对象，也可能只是 ID。这里在总线边界一次性解码为强类型，
//! 其后的处理只面对确定的形态。
//!
use crate::error::{DomainError, DomainResult};
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// 文章 ID
pub type PostId = u64;
/// 站点 ID
pub type SiteId = u64;

/// 已解析的文章记录
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    id: PostId,
    #[builder(default, into)]
    guid: String,
    #[builder(default)]
    #[serde(default)]
    post_meta: BTreeMap<String, String>,
}

impl PostRecord {
    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    pub fn post_meta(&self) -> &BTreeMap<String, String> {
        &self.post_meta
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.post_meta.get(key).map(String::as_str)
    }

    /// 从钩子参数中的对象形态解码
    ///
    /// 兼容宿主的字段命名：`ID`/`id`、`post_guid`/`guid`、`postmeta`/`post_meta`。
    pub fn from_hook_object(obj: &Map<String, Value>) -> DomainResult<Self> {
        let id = field(obj, &["ID", "id"])
            .and_then(as_id)
            .ok_or_else(|| DomainError::invalid_value("post record without a numeric ID"))?;

        let guid = match field(obj, &["post_guid", "guid"]) {
            None | Some(Value::Null) => String::new(),
            Some(v) => scalar_to_string(v)
                .ok_or_else(|| DomainError::invalid_value("post guid must be a scalar"))?,
        };

        let post_meta = match field(obj, &["postmeta", "post_meta"]) {
            Some(Value::Object(meta)) => meta
                .iter()
                .filter_map(|(k, v)| scalar_to_string(v).map(|s| (k.clone(), s)))
                .collect(),
            _ => BTreeMap::new(),
        };

        Ok(Self { id, guid, post_meta })
    }
}

/// 文章引用：完整记录或待解析的 ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostRef {
    Record(PostRecord),
    Id(PostId),
}

impl PostRef {
    pub fn from_hook_arg(value: &Value) -> DomainResult<Self> {
        match value {
            Value::Object(obj) => Ok(Self::Record(PostRecord::from_hook_object(obj)?)),
            Value::Number(_) => as_id(value)
                .map(Self::Id)
                .ok_or_else(|| DomainError::invalid_value(format!("invalid post id: {value}"))),
            other => Err(DomainError::invalid_value(format!(
                "post must be a record or an id, got {other}"
            ))),
        }
    }
}

impl From<PostRecord> for PostRef {
    fn from(record: PostRecord) -> Self {
        Self::Record(record)
    }
}

impl From<PostId> for PostRef {
    fn from(id: PostId) -> Self {
        Self::Id(id)
    }
}

/// 参与同步的站点，核心只读取其 `id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRef {
    id: SiteId,
}

impl SiteRef {
    pub fn new(id: SiteId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> SiteId {
        self.id
    }

    pub fn from_hook_arg(value: &Value) -> DomainResult<Self> {
        let id = match value {
            Value::Object(obj) => field(obj, &["ID", "id"]).and_then(as_id),
            other => as_id(other),
        };
        id.map(Self::new)
            .ok_or_else(|| DomainError::invalid_value(format!("invalid site: {value}")))
    }
}

/// 同步客户端（传输实现），对核心不透明，仅用于诊断
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientRef(Value);

impl ClientRef {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// 尽力取得客户端名称
    pub fn name(&self) -> Option<&str> {
        match &self.0 {
            Value::String(s) => Some(s),
            Value::Object(obj) => field(obj, &["name", "class"]).and_then(Value::as_str),
            _ => None,
        }
    }
}

impl From<Value> for ClientRef {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k))
}

fn as_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "1" } else { "" }.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_host_shaped_post_record() {
        let post = PostRef::from_hook_arg(&json!({
            "ID": 5,
            "post_guid": "http://example.com/?p=5",
            "postmeta": { "is_update": "2024-01-01 10:00:00", "views": 3, "tags": ["a"] }
        }))
        .unwrap();

        let PostRef::Record(record) = post else {
            panic!("expected a record");
        };
        assert_eq!(record.id(), 5);
        assert_eq!(record.guid(), "http://example.com/?p=5");
        assert_eq!(record.meta("is_update"), Some("2024-01-01 10:00:00"));
        assert_eq!(record.meta("views"), Some("3"));
        // 非标量元数据被跳过
        assert_eq!(record.meta("tags"), None);
    }

    #[test]
    fn numeric_post_becomes_id() {
        assert_eq!(PostRef::from_hook_arg(&json!(12)).unwrap(), PostRef::Id(12));
        assert!(PostRef::from_hook_arg(&json!(-1)).is_err());
        assert!(PostRef::from_hook_arg(&json!("12")).is_err());
    }

    #[test]
    fn record_without_id_is_rejected() {
        let err = PostRef::from_hook_arg(&json!({ "guid": "x" })).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }));
    }

    #[test]
    fn site_accepts_object_or_id() {
        assert_eq!(SiteRef::from_hook_arg(&json!({ "ID": 42 })).unwrap().id(), 42);
        assert_eq!(SiteRef::from_hook_arg(&json!(42)).unwrap().id(), 42);
        assert_eq!(SiteRef::from_hook_arg(&json!("42")).unwrap().id(), 42);
        assert!(SiteRef::from_hook_arg(&json!(null)).is_err());
    }

    #[test]
    fn client_name_is_best_effort() {
        assert_eq!(ClientRef::new(json!("wp_xmlrpc")).name(), Some("wp_xmlrpc"));
        assert_eq!(
            ClientRef::new(json!({ "class": "Syndication_WP_REST_Client" })).name(),
            Some("Syndication_WP_REST_Client")
        );
        assert_eq!(ClientRef::new(json!(null)).name(), None);
    }
}
