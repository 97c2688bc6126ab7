//! 文章存储（PostStore）协议
//!
//! 由宿主环境提供，核心只用它把数字 ID 解析为完整记录（含元数据）。
//!
use crate::{
    error::DomainResult as Result,
    post::{PostId, PostRecord},
};
use async_trait::async_trait;

#[async_trait]
pub trait PostStore: Send + Sync {
    /// 解析文章；不存在时返回 `DomainError::NotFound`
    async fn resolve(&self, id: PostId) -> Result<PostRecord>;
}
