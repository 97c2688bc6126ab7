//! 领域层统一错误定义
//!
//! 聚焦文章解析、钩子参数解码与通知投递的最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（通知核心最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 序列化/参数解码 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    #[error("invalid arguments: hook={hook}, expected>={expected}, found={found}")]
    InvalidArguments {
        hook: String,
        expected: usize,
        found: usize,
    },

    // --- 协作方 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("notification sink error: sink={sink}, reason={reason}")]
    Sink { sink: String, reason: String },
}

impl DomainError {
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn sink(sink: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Sink {
            sink: sink.into(),
            reason: reason.into(),
        }
    }

    /// 是否为文章解析失败（目标不存在）
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_not_found_is_not_found() {
        assert!(DomainError::not_found("post 9").is_not_found());
        assert!(!DomainError::sink("webhook", "timeout").is_not_found());
        assert!(!DomainError::invalid_value("bad id").is_not_found());
    }

    #[test]
    fn sink_error_names_the_sink() {
        let err = DomainError::sink("webhook", "503 from receiver");
        assert_eq!(
            err.to_string(),
            "notification sink error: sink=webhook, reason=503 from receiver"
        );
    }
}
