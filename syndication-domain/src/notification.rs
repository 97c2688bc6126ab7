//! 同步事件与规范化通知记录
//!
//! `SyndicationEvent` 是一次钩子触发解码后的瞬时输入；
//! `NotificationEvent` 是规范化器与分发器之间的契约，每次触发新建、立即消费、从不存储。
//!
use crate::post::{ClientRef, PostRecord, PostRef, SiteId, SiteRef};
use crate::result_value::ResultValue;
use crate::status::Status;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 事件动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    New,
    Update,
    Delete,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 事件来源方向：拉取（导入）或推送（导出）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Pull,
    Push,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Push => "push",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一次钩子触发的解码结果
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct SyndicationEvent {
    pub(crate) kind: EventKind,
    pub(crate) direction: Direction,
    pub(crate) result: ResultValue,
    #[builder(into)]
    pub(crate) post: PostRef,
    pub(crate) site: SiteRef,
    #[builder(default, into)]
    pub(crate) transport_type: String,
    #[builder(default)]
    pub(crate) client: ClientRef,
    /// 仅删除事件携带的远端 ID
    #[builder(into)]
    pub(crate) external_id: Option<String>,
}

impl SyndicationEvent {
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn result(&self) -> &ResultValue {
        &self.result
    }

    pub fn post(&self) -> &PostRef {
        &self.post
    }

    pub fn site(&self) -> SiteRef {
        self.site
    }

    pub fn transport_type(&self) -> &str {
        &self.transport_type
    }

    pub fn client(&self) -> &ClientRef {
        &self.client
    }

    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }
}

/// 供下游诊断使用的原样附带数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationExtra {
    pub post: PostRecord,
    pub result: ResultValue,
    pub transport_type: String,
    pub client: ClientRef,
}

/// 规范化通知记录
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    site_id: SiteId,
    event_kind: EventKind,
    direction: Direction,
    status: Status,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    log_time: Option<String>,
    extra: NotificationExtra,
}

impl NotificationEvent {
    pub fn site_id(&self) -> SiteId {
        self.site_id
    }

    pub fn event_kind(&self) -> EventKind {
        self.event_kind
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn log_time(&self) -> Option<&str> {
        self.log_time.as_deref()
    }

    pub fn extra(&self) -> &NotificationExtra {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn notification(log_time: Option<&str>) -> NotificationEvent {
        NotificationEvent::builder()
            .site_id(42)
            .event_kind(EventKind::Update)
            .direction(Direction::Pull)
            .status(Status::ok("hello,9"))
            .maybe_log_time(log_time)
            .extra(NotificationExtra {
                post: PostRecord::builder().id(5).guid("hello").build(),
                result: ResultValue::success(9),
                transport_type: "WP_RSS".to_string(),
                client: ClientRef::new(json!("rss")),
            })
            .build()
    }

    #[test]
    fn missing_log_time_is_omitted_from_json() {
        let value = serde_json::to_value(notification(None)).unwrap();
        let Value::Object(fields) = &value else {
            panic!("expected object, got {value}");
        };
        assert!(!fields.contains_key("log_time"));
        assert_eq!(fields["site_id"], json!(42));

        let back: NotificationEvent = serde_json::from_value(value).unwrap();
        assert_eq!(back.log_time(), None);
    }

    #[test]
    fn present_log_time_is_serialized() {
        let value = serde_json::to_value(notification(Some("2024-05-01 12:00:00"))).unwrap();
        assert_eq!(value["log_time"], json!("2024-05-01 12:00:00"));
        assert_eq!(value["event_kind"], json!("update"));
    }
}
