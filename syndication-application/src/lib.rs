pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod hooks;
pub mod inmemory_notification_sink;
pub mod inmemory_post_store;
pub mod notifier;
pub mod tracing_notification_sink;

pub use config::{HookNames, NotifierConfig};
pub use dispatcher::NotificationDispatcher;
pub use error::{AppError, AppResult, DispatchError};
pub use inmemory_notification_sink::InMemoryNotificationSink;
pub use inmemory_post_store::InMemoryPostStore;
pub use notifier::SyndicationNotifier;
pub use tracing_notification_sink::TracingNotificationSink;
