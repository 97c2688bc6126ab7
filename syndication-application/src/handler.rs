//! 钩子处理器
//!
//! 每个钩子对应一个处理器实例：解码参数 → 规范化 → 分发。
//! 解析与投递失败向总线如实上报，由总线汇总，不影响后续事件。
//!
use crate::dispatcher::NotificationDispatcher;
use crate::error::AppResult;
use crate::hooks::HookSpec;
use async_trait::async_trait;
use std::sync::Arc;
use syndication_domain::eventing::{EventHandler, HandledEventType, HookEvent};
use syndication_domain::{EventNormalizer, NotificationEvent};
use tracing::debug;

pub struct SyndicationHookHandler {
    name: String,
    spec: HookSpec,
    normalizer: Arc<EventNormalizer>,
    dispatcher: Arc<NotificationDispatcher>,
}

impl SyndicationHookHandler {
    pub fn new(
        spec: HookSpec,
        normalizer: Arc<EventNormalizer>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            name: format!("syndication-notifier:{}", spec.name),
            spec,
            normalizer,
            dispatcher,
        }
    }

    /// 处理一次钩子触发，返回已分发的通知记录
    pub async fn process(&self, event: &HookEvent) -> AppResult<NotificationEvent> {
        let decoded = self.spec.decode(event)?;
        debug!(
            hook = %self.spec.name,
            kind = %decoded.kind(),
            direction = %decoded.direction(),
            site_id = decoded.site().id(),
            "normalizing syndication event"
        );
        let notification = self.normalizer.normalize(decoded).await?;
        self.dispatcher.dispatch(&notification).await?;
        Ok(notification)
    }
}

#[async_trait]
impl EventHandler for SyndicationHookHandler {
    fn handler_name(&self) -> &str {
        &self.name
    }

    fn handled_event_type(&self) -> HandledEventType {
        HandledEventType::One(self.spec.name.clone())
    }

    fn accepted_args(&self) -> usize {
        self.spec.max_args
    }

    async fn handle(&self, event: &HookEvent) -> anyhow::Result<()> {
        self.process(event).await?;
        Ok(())
    }
}
