//! 事件处理器（EventHandler）
//!
//! 定义消费事件的处理逻辑与名称元信息。
//!
use crate::domain_event::Event;

/// 事件处理器：以副作用响应一条事件
///
/// 分发器只持有处理器的共享引用（`Arc`），不负责其生命周期。
pub trait EventHandler: Send + Sync {
    /// 处理器名称（用于失败记录与日志），默认取类型名
    fn handler_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// 处理事件
    fn handle(&self, event: &Event) -> anyhow::Result<()>;
}
