use serde::Serialize;
use serde::de::DeserializeOwned;

/// 领域事件载荷需要满足的通用能力边界
///
/// 载荷本身只是数据；`EVENT_TYPE` 即分发键，新增事件类型无需修改分发器。
pub trait EventPayload: Serialize + DeserializeOwned {
    /// 事件类型名（形如 `ProductCreatedEvent`）
    const EVENT_TYPE: &'static str;
}
