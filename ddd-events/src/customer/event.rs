use serde::{Deserialize, Serialize};

use super::Address;
use crate::domain_event::EventPayload;

/// 客户已创建
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub id: String,
    pub name: String,
}

impl EventPayload for CustomerCreated {
    const EVENT_TYPE: &'static str = "CustomerCreatedEvent";
}

/// 客户地址已变更
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerChangeAddress {
    pub id: String,
    pub name: String,
    pub address: Address,
}

impl EventPayload for CustomerChangeAddress {
    const EVENT_TYPE: &'static str = "CustomerChangeAddressEvent";
}
