//! 内存版事件总线（InMemoryEventBus）
//!
//! 同步语义：`publish` 不派生任务，在调用方任务中按注册顺序逐个 await 处理器；
//! 每个处理器只收到其声明个数的参数。典型用途：嵌入式宿主、测试与本地开发。

use super::{EventBus, EventHandler, HandlerFailure, HookEvent, PublishReport};
use crate::error::DomainResult as Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone, Default)]
pub struct InMemoryEventBus {
    handlers: Arc<RwLock<Vec<Arc<dyn EventHandler>>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已注册的处理器数
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    fn matching(&self, name: &str) -> Vec<Arc<dyn EventHandler>> {
        self.handlers
            .read()
            .iter()
            .filter(|h| h.handled_event_type().matches(name))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    fn subscribe(&self, handler: Arc<dyn EventHandler>) {
        debug!(handler = handler.handler_name(), "handler subscribed");
        self.handlers.write().push(handler);
    }

    async fn publish(&self, event: &HookEvent) -> Result<PublishReport> {
        // 先复制匹配列表，避免跨 await 持有锁
        let handlers = self.matching(event.name());
        let mut report = PublishReport::new(event.name());

        for h in handlers {
            let args = event.truncated(h.accepted_args());
            report.handled += 1;
            if let Err(error) = h.handle(&args).await {
                warn!(
                    hook = event.name(),
                    handler = h.handler_name(),
                    error = %error,
                    "event handler failed"
                );
                report.failures.push(HandlerFailure {
                    handler: h.handler_name().to_string(),
                    error,
                });
            }
        }

        Ok(report)
    }
}
