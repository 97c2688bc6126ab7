//! 内容同步通知核心（syndication-domain）
//!
//! 同步引擎在拉取/推送文章的生命周期中触发五种形态各异的钩子，
//! 本 crate 将它们归约为同一条规范化通知记录：
//! - 数据模型（`post`、`result_value`、`status`、`notification`）；
//! - 结果分类（`classifier`）与纯文本清洗（`sanitize`）；
//! - 事件规范化（`normalizer`），依赖 `PostStore` 解析文章；
//! - 协作方协议（`post_store`、`notification_sink`）；
//! - 事件系统（`eventing`）：总线与处理器抽象及进程内实现。
//!
//! 具体的文章存储与通知渠道由宿主提供，本 crate 只定义边界。
//!
pub mod classifier;
pub mod error;
#[cfg(feature = "eventing")]
pub mod eventing;
pub mod normalizer;
pub mod notification;
pub mod notification_sink;
pub mod post;
pub mod post_store;
pub mod result_value;
pub mod sanitize;
pub mod status;

pub use classifier::{IdCoercion, classify, classify_with};
pub use error::{DomainError, DomainResult};
pub use normalizer::EventNormalizer;
pub use notification::{Direction, EventKind, NotificationEvent, NotificationExtra, SyndicationEvent};
pub use post::{ClientRef, PostId, PostRecord, PostRef, SiteId, SiteRef};
pub use result_value::ResultValue;
pub use status::Status;
