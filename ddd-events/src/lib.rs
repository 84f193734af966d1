//! DDD 领域事件基础库（ddd-events）
//!
//! 提供进程内、同步的领域事件发布/订阅，以及用于演示的客户、商品领域模型：
//! - 领域事件（`domain_event`）：以类型名为分发键、携带 JSON 载荷的不可变事件；
//! - 事件系统（`eventing`）：处理器、注册表与按注册顺序扇出的分发器；
//! - 实体（`entity`）与值对象（`value_object`）的最小抽象；
//! - `customer` / `product`：会产生领域事件的实体与对应的日志处理器。
//!
//! 典型用法：
//! 1. 为事件载荷实现 `EventPayload`，为副作用实现 `EventHandler`；
//! 2. 在 `EventDispatcher` 上按事件类型注册处理器；
//! 3. 实体在状态变更时记录事件，调用方取出后交给分发器 `notify`。
//!
//! ```
//! use std::sync::Arc;
//! use ddd_events::customer::{Customer, CustomerCreated, handler::SendConsoleLogOneHandler};
//! use ddd_events::entity::Entity;
//! use ddd_events::eventing::EventDispatcher;
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.register_for::<CustomerCreated>(Arc::new(SendConsoleLogOneHandler));
//!
//! let mut customer = Customer::new("1", "Customer 1").unwrap();
//! customer.take_events().publish(&dispatcher).unwrap();
//! ```
//!
pub mod customer;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod eventing;
pub mod product;
pub mod value_object;
