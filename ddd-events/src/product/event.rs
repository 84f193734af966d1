use serde::{Deserialize, Serialize};

use crate::domain_event::EventPayload;

/// 商品已创建
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl EventPayload for ProductCreated {
    const EVENT_TYPE: &'static str = "ProductCreatedEvent";
}
