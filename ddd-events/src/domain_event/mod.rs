//! 领域事件（Domain Event）与事件集合
//!
//! 定义事件载荷需要实现的最小接口（`EventPayload`）、以类型名为分发键的
//! 不可变事件 `Event`，以及实体在状态变更时累积的待发布事件集合 `DomainEvents`。

mod domain_events;
mod event;
mod event_payload;

pub use domain_events::DomainEvents;
pub use event::Event;
pub use event_payload::EventPayload;
