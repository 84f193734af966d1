//! 事件子系统（eventing）
//!
//! 提供进程内、同步的事件发布/订阅：
//! - `EventHandler`：对某类事件产生副作用的处理器；
//! - `HandlerRegistry`：事件类型名到有序处理器序列的映射；
//! - `EventDispatcher`：维护注册表并按注册顺序同步扇出通知。
//!
//! 不做异步投递、优先级或通配匹配；处理器失败的传播方式由 `FailurePolicy` 显式决定。
//!
pub mod dispatcher;
pub mod handler;
pub mod registry;

pub use dispatcher::{DispatcherConfig, EventDispatcher, FailurePolicy};
pub use handler::EventHandler;
pub use registry::HandlerRegistry;
