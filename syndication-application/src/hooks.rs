//! 钩子表与参数解码
//!
//! | 钩子 | 参数 | 动作 |
//! |---|---|---|
//! | pull-new-post | result, post, site, transport_type, client | new |
//! | pull-edit-post | 同上 | update |
//! | push-delete-post | result, external_id, post_id, site_id, transport_type, client | delete |
//! | push-new-post | result, post_id, site, transport_type, client, [info] | new |
//! | push-edit-post | 同上 | update |
//!
//! 位置参数在这里一次性解码为 [`SyndicationEvent`]，之后不再出现动态形态。
//!
use crate::config::HookNames;
use serde_json::Value;
use syndication_domain::eventing::HookEvent;
use syndication_domain::{
    ClientRef, Direction, DomainError, DomainResult, EventKind, PostRef, ResultValue, SiteRef,
    SyndicationEvent,
};

/// 参数布局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgLayout {
    /// result, post, site, transport_type, client, [info]
    Standard,
    /// result, external_id, post_id, site_id, transport_type, client
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookSpec {
    pub name: String,
    pub kind: EventKind,
    pub direction: Direction,
    pub layout: ArgLayout,
    /// 必须提供的参数个数
    pub min_args: usize,
    /// 处理器接收的参数上限
    pub max_args: usize,
}

impl HookSpec {
    fn new(
        name: &str,
        kind: EventKind,
        direction: Direction,
        layout: ArgLayout,
        min_args: usize,
        max_args: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            direction,
            layout,
            min_args,
            max_args,
        }
    }

    /// 按配置的钩子名生成完整钩子表（注册顺序即表顺序）
    pub fn table(names: &HookNames) -> Vec<HookSpec> {
        use Direction::{Pull, Push};
        vec![
            Self::new(&names.pull_new, EventKind::New, Pull, ArgLayout::Standard, 5, 5),
            Self::new(&names.pull_edit, EventKind::Update, Pull, ArgLayout::Standard, 5, 5),
            Self::new(&names.push_delete, EventKind::Delete, Push, ArgLayout::Delete, 6, 6),
            Self::new(&names.push_new, EventKind::New, Push, ArgLayout::Standard, 5, 6),
            Self::new(&names.push_edit, EventKind::Update, Push, ArgLayout::Standard, 5, 6),
        ]
    }

    pub fn decode(&self, event: &HookEvent) -> DomainResult<SyndicationEvent> {
        let args = event.args();
        if args.len() < self.min_args {
            return Err(DomainError::InvalidArguments {
                hook: self.name.clone(),
                expected: self.min_args,
                found: args.len(),
            });
        }

        let result = ResultValue::from_hook_arg(&args[0]);
        let (result, post, site, transport, client, external_id) = match self.layout {
            ArgLayout::Standard => {
                let info = args.get(5).filter(|v| !v.is_null()).cloned();
                (
                    result.with_info(info),
                    &args[1],
                    &args[2],
                    &args[3],
                    &args[4],
                    None,
                )
            }
            ArgLayout::Delete => (
                result,
                &args[2],
                &args[3],
                &args[4],
                &args[5],
                decode_external_id(&args[1])?,
            ),
        };

        Ok(SyndicationEvent::builder()
            .kind(self.kind)
            .direction(self.direction)
            .result(result)
            .post(PostRef::from_hook_arg(post)?)
            .site(SiteRef::from_hook_arg(site)?)
            .transport_type(decode_transport_type(transport)?)
            .client(ClientRef::new(client.clone()))
            .maybe_external_id(external_id)
            .build())
    }
}

fn decode_transport_type(value: &Value) -> DomainResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        other => Err(DomainError::invalid_value(format!(
            "transport type must be a string, got {other}"
        ))),
    }
}

fn decode_external_id(value: &Value) -> DomainResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(DomainError::invalid_value(format!(
            "external id must be a string or number, got {other}"
        ))),
    }
}
