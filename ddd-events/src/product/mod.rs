//! 商品（Product）
//!
//! 商品实体、“商品已创建”事件与其通知处理器。

mod entity;
mod event;
pub mod handler;

pub use entity::Product;
pub use event::ProductCreated;
