//! 同步通知器（SyndicationNotifier）
//!
//! 组合根：持有总线、文章存储与通知接收端的引用，
//! 通过显式、幂等的 [`SyndicationNotifier::start`] 为五个钩子各注册一个处理器。
//! 通知器不取消订阅，订阅与进程同寿命。
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use syndication_application::{InMemoryPostStore, SyndicationNotifier, TracingNotificationSink};
//! use syndication_domain::eventing::InMemoryEventBus;
//!
//! let notifier = SyndicationNotifier::builder()
//!     .event_bus(Arc::new(InMemoryEventBus::new()))
//!     .post_store(Arc::new(InMemoryPostStore::new()))
//!     .notification_sink(Arc::new(TracingNotificationSink::new()))
//!     .build();
//! assert!(notifier.start());
//! assert!(!notifier.start());
//! ```
use crate::config::NotifierConfig;
use crate::dispatcher::NotificationDispatcher;
use crate::handler::SyndicationHookHandler;
use crate::hooks::HookSpec;
use bon::bon;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use syndication_domain::EventNormalizer;
use syndication_domain::eventing::EventBus;
use syndication_domain::notification_sink::NotificationSink;
use syndication_domain::post_store::PostStore;
use tracing::{debug, info};

pub struct SyndicationNotifier {
    event_bus: Arc<dyn EventBus>,
    normalizer: Arc<EventNormalizer>,
    dispatcher: Arc<NotificationDispatcher>,
    hooks: Vec<HookSpec>,
    started: AtomicBool,
}

#[bon]
impl SyndicationNotifier {
    #[builder]
    pub fn new(
        event_bus: Arc<dyn EventBus>,
        post_store: Arc<dyn PostStore>,
        notification_sink: Arc<dyn NotificationSink>,
        #[builder(default)] config: NotifierConfig,
    ) -> Self {
        let normalizer = EventNormalizer::new(post_store).with_id_coercion(config.id_coercion());
        Self {
            event_bus,
            normalizer: Arc::new(normalizer),
            dispatcher: Arc::new(NotificationDispatcher::new(notification_sink)),
            hooks: HookSpec::table(&config.hooks),
            started: AtomicBool::new(false),
        }
    }
}

impl SyndicationNotifier {
    /// 注册全部钩子处理器
    ///
    /// 首次调用注册并返回 `true`；之后的调用不做任何事并返回 `false`。
    pub fn start(&self) -> bool {
        if self
            .started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("syndication notifier already started");
            return false;
        }

        for spec in &self.hooks {
            self.event_bus.subscribe(Arc::new(SyndicationHookHandler::new(
                spec.clone(),
                self.normalizer.clone(),
                self.dispatcher.clone(),
            )));
        }

        info!(
            hooks = self.hooks.len(),
            sink = self.dispatcher.sink_name(),
            "syndication notifier started"
        );
        true
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    /// 订阅的钩子表
    pub fn hooks(&self) -> &[HookSpec] {
        &self.hooks
    }
}
