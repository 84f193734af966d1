use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::event_payload::EventPayload;
use crate::error::{DomainError, DomainResult};

/// 领域事件：类型名 + 载荷，构造后不可变
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct Event {
    /// 事件唯一标识符
    #[builder(default = Uuid::new_v4().to_string())]
    event_id: String,
    /// 事件类型，即分发键
    #[builder(into)]
    event_type: String,
    /// 事件发生时间
    #[builder(default = Utc::now())]
    occurred_at: DateTime<Utc>,
    /// 事件负载（具名字段的 JSON 对象）
    #[builder(default = Value::Object(Default::default()))]
    payload: Value,
}

impl Event {
    pub fn new(event_type: impl Into<String>, payload: Value) -> Self {
        Self::builder()
            .event_type(event_type)
            .payload(payload)
            .build()
    }

    /// 由强类型载荷构造事件，分发键取 `P::EVENT_TYPE`
    pub fn from_payload<P>(payload: &P) -> DomainResult<Self>
    where
        P: EventPayload,
    {
        Ok(Self::new(P::EVENT_TYPE, serde_json::to_value(payload)?))
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// 读取载荷中的单个字段
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// 以强类型视图读取载荷
    ///
    /// 事件类型与 `P::EVENT_TYPE` 不一致时返回 `TypeMismatch`。
    pub fn payload_as<P>(&self) -> DomainResult<P>
    where
        P: EventPayload,
    {
        if self.event_type != P::EVENT_TYPE {
            return Err(DomainError::TypeMismatch {
                expected: P::EVENT_TYPE.to_string(),
                found: self.event_type.clone(),
            });
        }

        Ok(serde_json::from_value(self.payload.clone())?)
    }
}
