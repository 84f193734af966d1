use tracing::info;

use crate::customer::handler::str_field;
use crate::domain_event::Event;
use crate::eventing::EventHandler;

/// 商品创建后发送通知邮件（此处以日志代替）
#[derive(Debug, Default)]
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    fn handler_name(&self) -> &str {
        "send_email_when_product_is_created"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        info!(
            product = str_field(event, "name"),
            price = event.field("price").and_then(serde_json::Value::as_f64),
            "sending email: product created"
        );
        Ok(())
    }
}
