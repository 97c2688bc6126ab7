use async_trait::async_trait;
use parking_lot::Mutex;
use syndication_domain::notification_sink::NotificationSink;
use syndication_domain::{DomainResult, NotificationEvent};

/// 基于内存的通知接收端
/// - 按到达顺序记录所有通知，便于测试与本地排查
pub struct InMemoryNotificationSink {
    name: String,
    received: Mutex<Vec<NotificationEvent>>,
}

impl Default for InMemoryNotificationSink {
    fn default() -> Self {
        Self {
            name: "in-memory".to_string(),
            received: Mutex::new(Vec::new()),
        }
    }
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已接收通知的快照
    pub fn notifications(&self) -> Vec<NotificationEvent> {
        self.received.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.received.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl NotificationSink for InMemoryNotificationSink {
    fn sink_name(&self) -> &str {
        &self.name
    }

    async fn notify(&self, notification: &NotificationEvent) -> DomainResult<()> {
        self.received.lock().push(notification.clone());
        Ok(())
    }
}
