//! 通知接收端（NotificationSink）协议
//!
//! 持久化、邮件、webhook 等具体渲染与投递完全由实现方负责；
//! 重试若有需要也属于实现方。
//!
use crate::{error::DomainResult as Result, notification::NotificationEvent};
use async_trait::async_trait;

#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// 接收端名称（用于日志与错误定位）
    fn sink_name(&self) -> &str;

    /// 投递一条规范化通知，投递失败应如实返回错误
    async fn notify(&self, notification: &NotificationEvent) -> Result<()>;
}
