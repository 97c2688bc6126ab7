//! 通知分发器（NotificationDispatcher）
//!
//! 将规范化记录原样交给通知接收端，并如实返回接收端的投递结果。
//! 本层不做重试。
//!
use crate::error::DispatchError;
use std::sync::Arc;
use syndication_domain::NotificationEvent;
use syndication_domain::notification_sink::NotificationSink;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct NotificationDispatcher {
    sink: Arc<dyn NotificationSink>,
}

impl NotificationDispatcher {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    pub fn sink_name(&self) -> &str {
        self.sink.sink_name()
    }

    pub async fn dispatch(&self, notification: &NotificationEvent) -> Result<(), DispatchError> {
        debug!(
            sink = self.sink.sink_name(),
            site_id = notification.site_id(),
            kind = %notification.event_kind(),
            ok = notification.status().is_ok(),
            "dispatching notification"
        );

        self.sink.notify(notification).await.map_err(|source| {
            warn!(
                sink = self.sink.sink_name(),
                site_id = notification.site_id(),
                kind = %notification.event_kind(),
                error = %source,
                "notification sink failed"
            );
            DispatchError {
                sink: self.sink.sink_name().to_string(),
                site_id: notification.site_id(),
                kind: notification.event_kind(),
                source,
            }
        })
    }
}
