//! 通知器配置
//!
//! 全部字段带默认值，可从 JSON 文本或文件加载：
//!
//! ```rust
//! use syndication_application::config::NotifierConfig;
//!
//! let config = NotifierConfig::from_json_str(r#"{ "strict_result_ids": true }"#).unwrap();
//! assert!(config.strict_result_ids);
//! assert_eq!(config.hooks.pull_new, "pull-new-post");
//! ```
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use syndication_domain::IdCoercion;

/// 五个钩子的名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookNames {
    pub pull_new: String,
    pub pull_edit: String,
    pub push_delete: String,
    pub push_new: String,
    pub push_edit: String,
}

impl Default for HookNames {
    fn default() -> Self {
        Self {
            pull_new: "pull-new-post".into(),
            pull_edit: "pull-edit-post".into(),
            push_delete: "push-delete-post".into(),
            push_new: "push-new-post".into(),
            push_edit: "push-edit-post".into(),
        }
    }
}

impl HookNames {
    /// 宿主插件使用的原始钩子名
    pub fn legacy() -> Self {
        Self {
            pull_new: "syn_post_pull_new_post".into(),
            pull_edit: "syn_post_pull_edit_post".into(),
            push_delete: "syn_post_push_delete_post".into(),
            push_new: "syn_post_push_new_post".into(),
            push_edit: "syn_post_push_edit_post".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    pub hooks: HookNames,
    /// 成功结果必须是整数形态；默认关闭以兼容宽松转换
    pub strict_result_ids: bool,
}

impl NotifierConfig {
    pub fn from_json_str(s: &str) -> AppResult<Self> {
        serde_json::from_str(s).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn id_coercion(&self) -> IdCoercion {
        if self.strict_result_ids {
            IdCoercion::Strict
        } else {
            IdCoercion::Lenient
        }
    }
}
