//! 事件子系统（eventing）
//!
//! 宿主环境的发布/订阅设施在核心中的抽象：
//! - `HookEvent`：具名事件与其位置参数；
//! - `EventHandler`：订阅某个/多个/全部钩子的处理器；
//! - `EventBus`：统一的订阅/发布接口；
//! - `InMemoryEventBus`：进程内实现，按注册顺序在调用方任务中依次执行处理器。
//!
pub mod bus;
pub mod bus_inmemory;
pub mod handler;
pub mod hook_event;

pub use bus::{EventBus, HandlerFailure, PublishReport};
pub use bus_inmemory::InMemoryEventBus;
pub use handler::{EventHandler, HandledEventType};
pub use hook_event::HookEvent;
