use anyhow::Result;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use syndication_application::{
    InMemoryPostStore, NotifierConfig, SyndicationNotifier, TracingNotificationSink,
};
use syndication_domain::PostRecord;
use syndication_domain::eventing::{EventBus, HookEvent, InMemoryEventBus};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "SYNDICATION_NOTIFIER_CONFIG";

fn load_config() -> Result<NotifierConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => Ok(NotifierConfig::from_path(path)?),
        Err(_) => Ok(NotifierConfig::default()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let hooks = config.hooks.clone();

    let posts: InMemoryPostStore = [
        PostRecord::builder()
            .id(5)
            .guid("https://origin.example/?p=5")
            .build(),
        PostRecord::builder()
            .id(6)
            .guid("https://origin.example/?p=6")
            .post_meta(BTreeMap::from([(
                "is_update".to_string(),
                "2024-05-01 12:00:00".to_string(),
            )]))
            .build(),
    ]
    .into_iter()
    .collect();

    let bus = Arc::new(InMemoryEventBus::new());
    let notifier = SyndicationNotifier::builder()
        .event_bus(bus.clone())
        .post_store(Arc::new(posts))
        .notification_sink(Arc::new(TracingNotificationSink::new()))
        .config(config)
        .build();
    notifier.start();

    let site = json!({ "ID": 42 });
    let events = vec![
        HookEvent::new(
            hooks.pull_new.clone(),
            vec![
                json!(5),
                json!({ "ID": 5, "post_guid": "https://origin.example/?p=5" }),
                site.clone(),
                json!("WP_RSS"),
                json!("rss"),
            ],
        ),
        HookEvent::new(
            hooks.pull_edit,
            vec![json!(false), json!(6), site.clone(), json!("WP_RSS"), json!("rss")],
        ),
        HookEvent::new(
            hooks.push_new,
            vec![
                json!(301),
                json!(5),
                site.clone(),
                json!("WP_XMLRPC"),
                json!("xmlrpc"),
                json!({ "remote": "https://target.example/?p=301" }),
            ],
        ),
        HookEvent::new(
            hooks.push_edit,
            vec![
                json!({ "error": { "code": "auth", "message": "invalid credentials" } }),
                json!(5),
                site.clone(),
                json!("WP_XMLRPC"),
                json!("xmlrpc"),
            ],
        ),
        HookEvent::new(
            hooks.push_delete,
            vec![
                json!(true),
                json!("301"),
                json!(5),
                json!(42),
                json!("WP_XMLRPC"),
                json!("xmlrpc"),
            ],
        ),
        // 404 不存在，处理器上报 NotFound
        HookEvent::new(
            hooks.pull_new,
            vec![json!(1), json!(404), site, json!("WP_RSS"), json!("rss")],
        ),
    ];

    for report in bus.publish_batch(&events).await? {
        for failure in &report.failures {
            warn!(hook = %report.event, handler = %failure.handler, error = %failure.error, "hook not delivered");
        }
        info!(hook = %report.event, handled = report.handled, succeeded = report.succeeded(), "hook processed");
    }

    Ok(())
}
