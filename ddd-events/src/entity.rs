//! 实体（Entity）基础抽象
//!
//! 为领域实体提供统一的标识，并约定实体以 `DomainEvents` 暂存状态变更产生的事件。
//!
use std::fmt::Display;

use crate::domain_event::DomainEvents;

/// 具备唯一标识、会产生领域事件的实体抽象
pub trait Entity {
    /// 实体标识类型，要求可显示与可克隆
    type Id: Clone + Display;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;

    /// 取出尚未发布的事件
    fn take_events(&mut self) -> DomainEvents;
}
