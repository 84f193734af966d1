//! 客户（Customer）
//!
//! 客户实体、地址值对象，以及“客户已创建”“客户地址已变更”两类事件与其日志处理器。

mod address;
mod entity;
mod event;
pub mod handler;

pub use address::Address;
pub use entity::Customer;
pub use event::{CustomerChangeAddress, CustomerCreated};
