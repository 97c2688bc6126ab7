//! 事件总线（EventBus）协议
//!
//! 订阅按注册顺序追加；发布时在调用方任务中依次执行匹配的处理器。
//! 单个处理器失败不影响后续处理器与后续事件，失败汇总在 [`PublishReport`] 中。
//!
use super::{EventHandler, HookEvent};
use crate::error::DomainResult as Result;
use async_trait::async_trait;
use std::sync::Arc;

/// 单个处理器的失败
#[derive(Debug)]
pub struct HandlerFailure {
    pub handler: String,
    pub error: anyhow::Error,
}

/// 一次发布的执行结果
#[derive(Debug, Default)]
pub struct PublishReport {
    pub event: String,
    pub handled: usize,
    pub failures: Vec<HandlerFailure>,
}

impl PublishReport {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            ..Default::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// 成功执行的处理器数
    pub fn succeeded(&self) -> usize {
        self.handled - self.failures.len()
    }
}

#[async_trait]
pub trait EventBus: Send + Sync {
    /// 注册处理器；不去重，重复注册会重复执行
    fn subscribe(&self, handler: Arc<dyn EventHandler>);

    async fn publish(&self, event: &HookEvent) -> Result<PublishReport>;

    async fn publish_batch(&self, events: &[HookEvent]) -> Result<Vec<PublishReport>> {
        let mut reports = Vec::with_capacity(events.len());
        for event in events {
            reports.push(self.publish(event).await?);
        }
        Ok(reports)
    }
}
