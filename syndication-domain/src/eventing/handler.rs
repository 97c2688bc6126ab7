//! 事件处理器（EventHandler）
//!
//! 定义消费某个/多个/全部钩子的处理逻辑与元信息（名称、订阅类型、接收参数个数）。
//!
use super::HookEvent;
use async_trait::async_trait;

#[derive(Clone, Debug)]
pub enum HandledEventType {
    One(String),
    Many(Vec<String>),
    All,
}

impl HandledEventType {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::One(n) => n == name,
            Self::Many(names) => names.iter().any(|n| n == name),
            Self::All => true,
        }
    }
}

/// 事件处理器：处理某一类型的钩子
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// 处理器名称（用于失败报告与日志）
    fn handler_name(&self) -> &str;
    /// 返回该处理器订阅的钩子
    fn handled_event_type(&self) -> HandledEventType;
    /// 最多接收的位置参数个数，多余参数由总线截断
    fn accepted_args(&self) -> usize {
        1
    }
    /// 处理事件
    async fn handle(&self, event: &HookEvent) -> anyhow::Result<()>;
}
