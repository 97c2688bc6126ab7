use serde::{Deserialize, Serialize};

/// 通知状态：一次拉取/推送是否成功，以及对应的消息
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    ok: bool,
    message: String,
}

impl Status {
    /// 无可用消息时的失败兜底文案
    pub const FAIL_MESSAGE: &'static str = "fail";

    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
