//! 事件规范化器（EventNormalizer）
//!
//! 五种钩子共用同一条路径：解析文章 → 取 `is_update` 元数据作为日志时间 →
//! 分类结果 → 组装 [`NotificationEvent`]。除文章存储查询外无副作用。
//!
use crate::classifier::{IdCoercion, classify_with};
use crate::error::DomainResult as Result;
use crate::notification::{NotificationEvent, NotificationExtra, SyndicationEvent};
use crate::post::{PostRecord, PostRef};
use crate::post_store::PostStore;
use std::sync::Arc;
use tracing::debug;

/// 作为日志时间来源的文章元数据键
pub const LOG_TIME_META_KEY: &str = "is_update";

#[derive(Clone)]
pub struct EventNormalizer {
    post_store: Arc<dyn PostStore>,
    coercion: IdCoercion,
}

impl EventNormalizer {
    pub fn new(post_store: Arc<dyn PostStore>) -> Self {
        Self {
            post_store,
            coercion: IdCoercion::default(),
        }
    }

    pub fn with_id_coercion(mut self, coercion: IdCoercion) -> Self {
        self.coercion = coercion;
        self
    }

    /// 将文章引用解析为完整记录；ID 不存在时如实返回 `NotFound`
    pub async fn resolve_post(&self, post: PostRef) -> Result<PostRecord> {
        match post {
            PostRef::Record(record) => Ok(record),
            PostRef::Id(id) => {
                debug!(post_id = id, "resolving post by id");
                self.post_store.resolve(id).await
            }
        }
    }

    pub async fn normalize(&self, event: SyndicationEvent) -> Result<NotificationEvent> {
        let SyndicationEvent {
            kind,
            direction,
            result,
            post,
            site,
            transport_type,
            client,
            ..
        } = event;

        let post = self.resolve_post(post).await?;
        let log_time = post.meta(LOG_TIME_META_KEY).map(str::to_string);
        let status = classify_with(&result, &post, self.coercion);

        Ok(NotificationEvent::builder()
            .site_id(site.id())
            .event_kind(kind)
            .direction(direction)
            .status(status)
            .maybe_log_time(log_time)
            .extra(NotificationExtra {
                post,
                result,
                transport_type,
                client,
            })
            .build())
    }
}
