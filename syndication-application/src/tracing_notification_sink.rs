use async_trait::async_trait;
use syndication_domain::notification_sink::NotificationSink;
use syndication_domain::{DomainResult, NotificationEvent};
use tracing::{info, warn};

/// 以结构化日志输出通知的接收端
/// - 成功记 `info`，失败记 `warn`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationSink;

impl TracingNotificationSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for TracingNotificationSink {
    fn sink_name(&self) -> &str {
        "tracing"
    }

    async fn notify(&self, n: &NotificationEvent) -> DomainResult<()> {
        let extra = n.extra();
        if n.status().is_ok() {
            info!(
                site_id = n.site_id(),
                kind = %n.event_kind(),
                direction = %n.direction(),
                log_time = n.log_time(),
                post_id = extra.post.id(),
                transport = %extra.transport_type,
                status_message = n.status().message(),
                "syndication succeeded"
            );
        } else {
            warn!(
                site_id = n.site_id(),
                kind = %n.event_kind(),
                direction = %n.direction(),
                log_time = n.log_time(),
                post_id = extra.post.id(),
                transport = %extra.transport_type,
                status_message = n.status().message(),
                "syndication failed"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use syndication_domain::{
        ClientRef, Direction, EventKind, NotificationExtra, PostRecord, ResultValue, Status,
    };

    fn notification(status: Status, log_time: Option<&str>) -> NotificationEvent {
        NotificationEvent::builder()
            .site_id(42)
            .event_kind(EventKind::Update)
            .direction(Direction::Push)
            .status(status)
            .maybe_log_time(log_time)
            .extra(NotificationExtra {
                post: PostRecord::builder().id(5).guid("hello").build(),
                result: ResultValue::success(301),
                transport_type: "WP_XMLRPC".to_string(),
                client: ClientRef::new(json!("xmlrpc")),
            })
            .build()
    }

    #[tokio::test]
    async fn logs_success_and_failure_without_error() {
        let sink = TracingNotificationSink::new();
        assert_eq!(sink.sink_name(), "tracing");

        sink.notify(&notification(
            Status::ok("hello,301"),
            Some("2024-05-01 12:00:00"),
        ))
        .await
        .unwrap();
        sink.notify(&notification(Status::failed("invalid credentials"), None))
            .await
            .unwrap();
    }
}
