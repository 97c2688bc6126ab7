use syndication_domain::{EventKind, SiteId, Status, error::DomainError};

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("dispatch: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("config: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// 通知接收端投递失败
#[derive(thiserror::Error, Debug)]
#[error("notification not delivered: sink={sink}, site={site_id}, kind={kind}: {source}")]
pub struct DispatchError {
    pub sink: String,
    pub site_id: SiteId,
    pub kind: EventKind,
    #[source]
    pub source: DomainError,
}

impl DispatchError {
    /// 转换为与分类结果对称的失败状态，便于调用方统一分支
    pub fn to_status(&self) -> Status {
        Status::failed(self.source.to_string())
    }
}
