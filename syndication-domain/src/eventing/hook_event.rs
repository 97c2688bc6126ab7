use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 具名钩子事件：名称 + 位置参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookEvent {
    name: String,
    args: Vec<Value>,
}

impl HookEvent {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// 截断为至多 `n` 个参数的副本（宿主按处理器声明的参数个数传参）
    pub fn truncated(&self, n: usize) -> Self {
        Self {
            name: self.name.clone(),
            args: self.args.iter().take(n).cloned().collect(),
        }
    }
}
