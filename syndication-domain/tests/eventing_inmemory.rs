use anyhow::{Result as AnyResult, bail};
use serde_json::json;
use std::sync::{Arc, Mutex};
use syndication_domain::eventing::{
    EventBus, EventHandler, HandledEventType, HookEvent, InMemoryEventBus,
};

/// 记录被调用的处理器名与收到的参数个数
#[derive(Clone, Default)]
struct Journal {
    inner: Arc<Mutex<Vec<(String, String, usize)>>>,
}

impl Journal {
    fn entries(&self) -> Vec<(String, String, usize)> {
        self.inner.lock().unwrap().clone()
    }
}

struct Recorder {
    name: &'static str,
    handles: HandledEventType,
    accepted: usize,
    fail_on: Option<&'static str>,
    journal: Journal,
}

#[async_trait::async_trait]
impl EventHandler for Recorder {
    fn handler_name(&self) -> &str {
        self.name
    }

    fn handled_event_type(&self) -> HandledEventType {
        self.handles.clone()
    }

    fn accepted_args(&self) -> usize {
        self.accepted
    }

    async fn handle(&self, event: &HookEvent) -> AnyResult<()> {
        self.journal.inner.lock().unwrap().push((
            self.name.to_string(),
            event.name().to_string(),
            event.args().len(),
        ));
        if self.fail_on == Some(event.name()) {
            bail!("{} refused {}", self.name, event.name());
        }
        Ok(())
    }
}

fn recorder(
    name: &'static str,
    handles: HandledEventType,
    accepted: usize,
    journal: &Journal,
) -> Recorder {
    Recorder {
        name,
        handles,
        accepted,
        fail_on: None,
        journal: journal.clone(),
    }
}

fn hook(name: &str, n: usize) -> HookEvent {
    HookEvent::new(name, (0..n).map(|i| json!(i)).collect())
}

#[tokio::test]
async fn handlers_run_in_registration_order_with_truncated_args() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let journal = Journal::default();
    bus.subscribe(Arc::new(recorder(
        "first",
        HandledEventType::One("a".into()),
        2,
        &journal,
    )));
    bus.subscribe(Arc::new(recorder("second", HandledEventType::All, 10, &journal)));
    bus.subscribe(Arc::new(recorder(
        "third",
        HandledEventType::Many(vec!["a".into(), "b".into()]),
        6,
        &journal,
    )));

    let report = bus.publish(&hook("a", 7)).await?;
    assert_eq!(report.handled, 3);
    assert!(report.is_clean());
    assert_eq!(
        journal.entries(),
        vec![
            ("first".to_string(), "a".to_string(), 2),
            ("second".to_string(), "a".to_string(), 7),
            ("third".to_string(), "a".to_string(), 6),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn unmatched_event_runs_nothing() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let journal = Journal::default();
    bus.subscribe(Arc::new(recorder(
        "only-a",
        HandledEventType::One("a".into()),
        1,
        &journal,
    )));

    let report = bus.publish(&hook("z", 1)).await?;
    assert_eq!(report.handled, 0);
    assert!(journal.entries().is_empty());
    Ok(())
}

#[tokio::test]
async fn failing_handler_does_not_stop_others_or_later_events() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let journal = Journal::default();
    bus.subscribe(Arc::new(Recorder {
        fail_on: Some("a"),
        ..recorder("flaky", HandledEventType::All, 1, &journal)
    }));
    bus.subscribe(Arc::new(recorder("steady", HandledEventType::All, 1, &journal)));

    let reports = bus.publish_batch(&[hook("a", 1), hook("b", 1)]).await?;
    assert_eq!(reports.len(), 2);

    assert_eq!(reports[0].failures.len(), 1);
    assert_eq!(reports[0].failures[0].handler, "flaky");
    assert!(reports[0].failures[0].error.to_string().contains("refused a"));
    assert_eq!(reports[0].succeeded(), 1);

    assert!(reports[1].is_clean());
    assert_eq!(journal.entries().len(), 4);
    Ok(())
}

#[tokio::test]
async fn duplicate_subscription_runs_twice() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let journal = Journal::default();
    let handler: Arc<dyn EventHandler> =
        Arc::new(recorder("dup", HandledEventType::All, 1, &journal));
    bus.subscribe(handler.clone());
    bus.subscribe(handler);

    assert_eq!(bus.handler_count(), 2);
    bus.publish(&hook("a", 1)).await?;
    assert_eq!(journal.entries().len(), 2);
    Ok(())
}
