//! 客户事件的日志处理器
//!
//! 只读取载荷中存在的字段并记录日志，载荷缺字段时不视为失败。
//!
use serde_json::Value;
use tracing::info;

use crate::domain_event::Event;
use crate::eventing::EventHandler;

/// 读取字符串字段；缺失或非字符串时返回空串
pub(crate) fn str_field<'a>(event: &'a Event, name: &str) -> &'a str {
    event.field(name).and_then(Value::as_str).unwrap_or_default()
}

/// “客户已创建”的第一条日志
#[derive(Debug, Default)]
pub struct SendConsoleLogOneHandler;

impl EventHandler for SendConsoleLogOneHandler {
    fn handler_name(&self) -> &str {
        "send_console_log_one"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        info!(
            customer_id = str_field(event, "id"),
            customer_name = str_field(event, "name"),
            "first log line for CustomerCreated"
        );
        Ok(())
    }
}

/// “客户已创建”的第二条日志
#[derive(Debug, Default)]
pub struct SendConsoleLogTwoHandler;

impl EventHandler for SendConsoleLogTwoHandler {
    fn handler_name(&self) -> &str {
        "send_console_log_two"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        info!(
            customer_id = str_field(event, "id"),
            customer_name = str_field(event, "name"),
            "second log line for CustomerCreated"
        );
        Ok(())
    }
}

/// 记录客户地址变更
#[derive(Debug, Default)]
pub struct SendConsoleLogAddressHandler;

impl EventHandler for SendConsoleLogAddressHandler {
    fn handler_name(&self) -> &str {
        "send_console_log_address"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let address = event
            .field("address")
            .map(Value::to_string)
            .unwrap_or_default();
        info!(
            customer_id = str_field(event, "id"),
            customer_name = str_field(event, "name"),
            address = %address,
            "customer address changed"
        );
        Ok(())
    }
}
